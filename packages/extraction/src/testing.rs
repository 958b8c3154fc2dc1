//! Testing utilities: HTML fixture builders for both supported sites.
//!
//! The generated markup mirrors the structure of the live pages closely
//! enough for the extractors (same tags, classes and sibling layout), so
//! tests here and in dependent crates can run without network access.
//! Pair with [`MockFetcher`](crate::fetchers::MockFetcher).

/// Escape text for inclusion in element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// One job card on the fake-jobs board.
#[derive(Debug, Clone)]
pub struct ListingFixture {
    pub title: String,
    pub company: String,
    pub location: String,
    pub apply_link: Option<String>,
}

impl ListingFixture {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: location.into(),
            apply_link: None,
        }
    }

    /// Give the card a footer with an "Apply" link.
    pub fn apply(mut self, href: impl Into<String>) -> Self {
        self.apply_link = Some(href.into());
        self
    }

    fn render(&self) -> String {
        let footer = match &self.apply_link {
            Some(href) => format!(
                r#"<footer class="card-footer">
                  <a href="https://www.realpython.com" class="card-footer-item">Learn</a>
                  <a href="{}" class="card-footer-item">Apply</a>
                </footer>"#,
                escape_html(href)
            ),
            None => String::new(),
        };

        format!(
            r#"<div class="column is-half">
              <div class="card">
                <div class="card-content">
                  <div class="media-content">
                    <h2 class="title is-5">{}</h2>
                    <h3 class="subtitle is-6 company">{}</h3>
                  </div>
                  <div class="content">
                    <p class="location">
                      {}
                    </p>
                    <p class="is-small has-text-grey"><time datetime="2021-04-08">2021-04-08</time></p>
                  </div>
                </div>
                {}
              </div>
            </div>"#,
            escape_html(&self.title),
            escape_html(&self.company),
            escape_html(&self.location),
            footer
        )
    }
}

/// Render a complete fake-jobs page.
pub fn listing_page(listings: &[ListingFixture]) -> String {
    let cards: String = listings.iter().map(ListingFixture::render).collect();
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><meta charset="utf-8"><title>Fake Python</title></head>
  <body>
    <section class="section">
      <div class="container mb-5"><h1 class="title is-1">Fake Python</h1></div>
      <div class="container">
        <div id="ResultsContainer" class="columns is-multiline">{}</div>
      </div>
    </section>
  </body>
</html>"#,
        cards
    )
}

/// One story on the Hacker News front page.
#[derive(Debug, Clone)]
pub struct StoryFixture {
    pub title: String,
    pub href: String,
    pub site: Option<String>,
    pub points: Option<String>,
    pub author: Option<String>,
    pub age: Option<String>,
    pub links: Vec<String>,
    pub has_subtext: bool,
}

impl StoryFixture {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            site: None,
            points: None,
            author: None,
            age: None,
            links: Vec::new(),
            has_subtext: true,
        }
    }

    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn points(mut self, points: impl Into<String>) -> Self {
        self.points = Some(points.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    /// Append a plain link to the subtext cell ("hide", "discuss", "5 comments").
    pub fn link(mut self, text: impl Into<String>) -> Self {
        self.links.push(text.into());
        self
    }

    /// Render the story without its subtext row.
    pub fn without_subtext(mut self) -> Self {
        self.has_subtext = false;
        self
    }

    fn render(&self, id: usize) -> String {
        let site = self
            .site
            .as_ref()
            .map(|s| {
                format!(
                    r#" <span class="sitebit comhead"> (<a href="from?site={0}"><span class="sitestr">{0}</span></a>)</span>"#,
                    escape_html(s)
                )
            })
            .unwrap_or_default();

        let primary = format!(
            r#"<tr class="athing submission" id="{id}">
              <td align="right" valign="top" class="title"><span class="rank">{id}.</span></td>
              <td class="title"><span class="titleline"><a href="{href}">{title}</a>{site}</span></td>
            </tr>"#,
            id = id,
            href = escape_html(&self.href),
            title = escape_html(&self.title),
            site = site
        );

        if !self.has_subtext {
            return primary;
        }

        let mut parts = Vec::new();
        if let Some(points) = &self.points {
            parts.push(format!(
                r#"<span class="score" id="score_{}">{}</span> by"#,
                id,
                escape_html(points)
            ));
        }
        if let Some(author) = &self.author {
            parts.push(format!(
                r#"<a href="user?id={0}" class="hnuser">{0}</a>"#,
                escape_html(author)
            ));
        }
        if let Some(age) = &self.age {
            parts.push(format!(
                r#"<span class="age"><a href="item?id={}">{}</a></span>"#,
                id,
                escape_html(age)
            ));
        }
        for text in &self.links {
            parts.push(format!(
                r#"| <a href="item?id={}">{}</a>"#,
                id,
                escape_html(text)
            ));
        }

        format!(
            r#"{primary}
            <tr><td colspan="2"></td><td class="subtext"><span class="subline">{subtext}</span></td></tr>
            <tr class="spacer" style="height:5px"></tr>"#,
            primary = primary,
            subtext = parts.join("\n")
        )
    }
}

/// Render a complete Hacker News front page.
pub fn story_page(stories: &[StoryFixture]) -> String {
    let rows: String = stories
        .iter()
        .enumerate()
        .map(|(i, story)| story.render(i + 1))
        .collect();
    format!(
        r#"<html lang="en" op="news">
  <head><title>Hacker News</title></head>
  <body><center>
    <table id="hnmain" border="0" cellpadding="0" cellspacing="0" width="85%">
      <tr><td><table border="0" cellpadding="0" cellspacing="0">{}
        <tr class="morespace" style="height:10px"></tr>
        <tr><td colspan="2"></td><td class="title"><a href="?p=2" class="morelink" rel="next">More</a></td></tr>
      </table></td></tr>
    </table>
  </center></body>
</html>"#,
        rows
    )
}
