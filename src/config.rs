use web_sys::Element;

pub const MOUNT_ID: &str = "lead-app";
pub const DEFAULT_FALLBACK_URL: &str = "/catalogo.pdf";

#[derive(Clone, Debug, PartialEq)]
pub struct FormConfig {
    /// Checked at submit time, not at startup.
    pub webhook_url: Option<String>,
    pub fallback_url: String,
    pub success_img: Option<String>,
    pub error_img: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            success_img: None,
            error_img: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarouselConfig {
    pub slides: Vec<String>,
    pub active: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageConfig {
    pub form: FormConfig,
    pub carousel: CarouselConfig,
}

impl PageConfig {
    /// Reads the `data-*` attributes of the mount element. Empty values
    /// count as missing.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let attr = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let form = FormConfig {
            webhook_url: attr("data-webhook"),
            fallback_url: attr("data-fallback-url")
                .unwrap_or_else(|| DEFAULT_FALLBACK_URL.to_string()),
            success_img: attr("data-success-img"),
            error_img: attr("data-error-img"),
        };

        let slides = attr("data-slides")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        let active = attr("data-active-slide")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Self {
            form,
            carousel: CarouselConfig { slides, active },
        }
    }

    pub fn from_element(element: &Element) -> Self {
        Self::from_attributes(|name| element.get_attribute(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(attrs: &[(&str, &str)]) -> PageConfig {
        let attrs: HashMap<String, String> = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PageConfig::from_attributes(|name| attrs.get(name).cloned())
    }

    #[test]
    fn defaults_without_attributes() {
        let config = config(&[]);
        assert_eq!(config.form.webhook_url, None);
        assert_eq!(config.form.fallback_url, "/catalogo.pdf");
        assert_eq!(config.form.success_img, None);
        assert!(config.carousel.slides.is_empty());
        assert_eq!(config.carousel.active, 0);
    }

    #[test]
    fn empty_attributes_count_as_missing() {
        let config = config(&[("data-webhook", ""), ("data-fallback-url", "  ")]);
        assert_eq!(config.form.webhook_url, None);
        assert_eq!(config.form.fallback_url, DEFAULT_FALLBACK_URL);
    }

    #[test]
    fn reads_every_attribute() {
        let config = config(&[
            ("data-webhook", "https://hooks.example.com/lead"),
            ("data-fallback-url", "/catalogo-2024.pdf"),
            ("data-success-img", "/img/ok.svg"),
            ("data-error-img", "/img/erro.svg"),
            ("data-slides", "/bg/1.webp, /bg/2.webp,,/bg/3.webp"),
            ("data-active-slide", "2"),
        ]);
        assert_eq!(
            config.form.webhook_url.as_deref(),
            Some("https://hooks.example.com/lead")
        );
        assert_eq!(config.form.fallback_url, "/catalogo-2024.pdf");
        assert_eq!(config.form.success_img.as_deref(), Some("/img/ok.svg"));
        assert_eq!(config.form.error_img.as_deref(), Some("/img/erro.svg"));
        assert_eq!(
            config.carousel.slides,
            vec!["/bg/1.webp", "/bg/2.webp", "/bg/3.webp"]
        );
        assert_eq!(config.carousel.active, 2);
    }

    #[test]
    fn bad_active_slide_falls_back_to_first() {
        let config = config(&[("data-active-slide", "dois")]);
        assert_eq!(config.carousel.active, 0);
    }
}
