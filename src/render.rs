//! HTML for the control page. Rendering is pure: it takes the selection as
//! input and never touches the settings source itself.

use crate::{config::PageConfig, metric::Metric};
use anyhow::Context;
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    title: &'a str,
    stylesheet: Option<&'a str>,
    form_action: &'a str,
    choices: Vec<Choice>,
}

/// One radio button in the form
struct Choice {
    id: &'static str,
    label: &'static str,
    checked: bool,
}

/// Render the full control page, with the given metric (if any) checked
pub fn render_page(
    config: &PageConfig,
    selected: Option<Metric>,
) -> anyhow::Result<String> {
    let template = IndexTemplate {
        title: &config.title,
        stylesheet: config.stylesheet.as_deref(),
        form_action: &config.form_action,
        choices: Metric::ALL
            .iter()
            .map(|&metric| Choice {
                id: metric.id(),
                label: metric.label(),
                checked: selected == Some(metric),
            })
            .collect(),
    };
    template.render().context("Error rendering control page")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Get the value of every radio input that's checked
    fn checked(html: &str) -> Vec<&str> {
        html.lines()
            .filter(|line| line.starts_with(r#"<input type="radio""#))
            .filter(|line| line.contains(" checked>"))
            .filter_map(|line| {
                let start = line.find(r#"value=""#)? + 7;
                let len = line[start..].find('"')?;
                Some(&line[start..start + len])
            })
            .collect()
    }

    fn render(selected: Option<Metric>) -> String {
        render_page(&PageConfig::default(), selected).unwrap()
    }

    #[test]
    fn test_one_radio_per_metric() {
        let html = render(None);
        let radios: Vec<&str> = html
            .lines()
            .filter(|line| line.contains(r#"name="setting""#))
            .collect();
        assert_eq!(radios.len(), Metric::ALL.len());
        assert_eq!(
            radios[1],
            r#"<input type="radio" name="setting" value="feelslike_f">Feels Like (degrees F)<br>"#
        );
        assert!(html.contains(r#"<input type="submit" value="Submit">"#));
        assert!(html.contains(
            r#"<form name="input" action="write_setting.php" method="get">"#
        ));
        assert!(!html.contains("<link"));
    }

    #[test]
    fn test_selected() {
        for &metric in Metric::ALL {
            assert_eq!(checked(&render(Some(metric))), vec![metric.id()]);
        }
    }

    #[test]
    fn test_feels_like_checked() {
        let html = render(Some(Metric::FeelsLike));
        assert!(html.contains(
            r#"<input type="radio" name="setting" value="feelslike_f" checked>Feels Like (degrees F)<br>"#
        ));
    }

    #[test]
    fn test_nothing_selected() {
        let html = render(None);
        assert!(checked(&html).is_empty());
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            render(Some(Metric::WindGust)),
            render(Some(Metric::WindGust))
        );
    }

    #[test]
    fn test_escapes_config() {
        let config = PageConfig {
            form_action: r#"write?a=1&b="2""#.into(),
            title: "<Clock>".into(),
            stylesheet: Some("mobile.css".into()),
        };
        let html = render_page(&config, None).unwrap();
        assert!(!html.contains("<Clock>"));
        assert!(!html.contains(r#"b="2""#));
        assert!(!html.contains("a=1&b"));
        assert!(html.contains(r#"<link rel="stylesheet" href="mobile.css""#));
    }
}
