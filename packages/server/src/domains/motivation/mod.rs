//! Random motivational image and quote for the workout log.

use axum::{routing::get, Json, Router};
use rand::Rng;
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Motivation {
    pub url: &'static str,
    pub quote: &'static str,
}

pub const MOTIVATIONS: [Motivation; 6] = [
    Motivation {
        url: "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=800",
        quote: "The only bad workout is the one that didn't happen.",
    },
    Motivation {
        url: "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?w=800",
        quote: "Push yourself, because no one else is going to do it for you.",
    },
    Motivation {
        url: "https://images.unsplash.com/photo-1526506118085-60ce8714f8c5?w=800",
        quote: "Strength does not come from the body. It comes from the will.",
    },
    Motivation {
        url: "https://images.unsplash.com/photo-1549060279-7e168fcee0c2?w=800",
        quote: "Your body can stand almost anything. It's your mind you have to convince.",
    },
    Motivation {
        url: "https://images.unsplash.com/photo-1583454110551-21f2fa2afe61?w=800",
        quote: "The pain you feel today will be the strength you feel tomorrow.",
    },
    Motivation {
        url: "https://images.unsplash.com/photo-1571019614242-c5c5dee9f50b?w=800",
        quote: "Don't stop when you're tired. Stop when you're done.",
    },
];

/// Pick one entry uniformly at random.
pub fn pick() -> Motivation {
    MOTIVATIONS[rand::rng().random_range(0..MOTIVATIONS.len())]
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/motivation", get(motivation_handler))
}

async fn motivation_handler() -> Json<Motivation> {
    Json(pick())
}
