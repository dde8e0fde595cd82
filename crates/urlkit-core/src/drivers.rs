//! Driver download pages per environment.
//!
//! Live lists the enterprise and GeForce driver pages for every driver
//! locale. Preview is derived from Live through the transcoder. Origin lists
//! the legacy download portal on the per-country origin hosts.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::transcode::{TranscodeError, Transcoder};

/// Environment to list driver pages for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverEnv {
    Origin,
    Preview,
    Live,
}

impl DriverEnv {
    pub const ALL: [DriverEnv; 3] = [DriverEnv::Origin, DriverEnv::Preview, DriverEnv::Live];

    pub fn as_str(self) -> &'static str {
        match self {
            DriverEnv::Origin => "origin",
            DriverEnv::Preview => "preview",
            DriverEnv::Live => "live",
        }
    }
}

impl fmt::Display for DriverEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DriverEnv::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown driver environment {s:?} (origin, preview, live)"))
    }
}

/// Live locales with driver pages, in listing order.
pub const DRIVER_LOCALES: &[&str] = &[
    "en-us", "en-gb", "zh-cn", "zh-tw", "ja-jp", "ko-kr", "en-in", "de-de", "es-es", "fr-fr",
    "it-it", "pl-pl", "tr-tr", "ru-ru", "es-la", "pt-br",
];

/// The enterprise lookup for `zh-cn` lives on the China site.
const CN_LOCALE: &str = "zh-cn";
const CN_ENTERPRISE_PAGE: &str = "https://www.nvidia.cn/drivers/lookup/";
const LIVE_HOST: &str = "https://www.nvidia.com";

/// Origin portal sites as `(host country, lang parameter)`.
const ORIGIN_SITES: &[(&str, &str)] = &[
    ("us", "en-us"),
    ("uk", "en-uk"),
    ("de", "de"),
    ("fr", "fr"),
    ("es", "es"),
    ("pl", "pl"),
    ("it", "it"),
    ("ru", "ru"),
    ("la", "la"),
    ("br", "br"),
    ("tw", "tw"),
    ("jp", "jp"),
    ("kr", "kr"),
    ("in", "en-in"),
    ("cn", "cn"),
];
/// Turkey has no portal; its origin host serves the regular driver pages.
const ORIGIN_TR: &str = "https://origin-aws-prod-tr.nvidia.com";

/// A titled block of driver page URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverSection {
    pub title: &'static str,
    pub urls: Vec<String>,
}

fn origin_portal(page: &str) -> Vec<String> {
    ORIGIN_SITES
        .iter()
        .map(|(site, lang)| {
            format!("https://origin-aws-prod-{site}.nvidia.com/download/{page}.aspx?lang={lang}")
        })
        .collect()
}

fn live_sections() -> Vec<DriverSection> {
    let enterprise = DRIVER_LOCALES
        .iter()
        .map(|locale| {
            if *locale == CN_LOCALE {
                CN_ENTERPRISE_PAGE.to_string()
            } else {
                format!("{LIVE_HOST}/{locale}/drivers/")
            }
        })
        .collect();
    let geforce = DRIVER_LOCALES
        .iter()
        .map(|locale| format!("{LIVE_HOST}/{locale}/geforce/drivers/"))
        .collect();
    vec![
        DriverSection {
            title: "Enterprise",
            urls: enterprise,
        },
        DriverSection {
            title: "GeForce",
            urls: geforce,
        },
    ]
}

/// Driver pages for `env`, grouped into sections.
pub fn driver_sections(
    env: DriverEnv,
    transcoder: &Transcoder,
) -> Result<Vec<DriverSection>, TranscodeError> {
    match env {
        DriverEnv::Live => Ok(live_sections()),
        DriverEnv::Preview => live_sections()
            .into_iter()
            .map(|section| -> Result<DriverSection, TranscodeError> {
                let urls = section
                    .urls
                    .iter()
                    .map(|u| transcoder.to_preview(u))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(DriverSection {
                    title: section.title,
                    urls,
                })
            })
            .collect(),
        DriverEnv::Origin => {
            let mut index = origin_portal("index");
            index.push(format!("{ORIGIN_TR}/drivers"));
            let mut find = origin_portal("Find");
            find.push(format!("{ORIGIN_TR}/drivers/beta"));
            Ok(vec![
                DriverSection {
                    title: "Index",
                    urls: index,
                },
                DriverSection {
                    title: "Find",
                    urls: find,
                },
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(env: DriverEnv) -> Vec<DriverSection> {
        driver_sections(env, &Transcoder::default()).unwrap()
    }

    #[test]
    fn live_lists_every_locale_twice() {
        let live = sections(DriverEnv::Live);
        let titles: Vec<_> = live.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Enterprise", "GeForce"]);
        assert!(live.iter().all(|s| s.urls.len() == DRIVER_LOCALES.len()));
        assert_eq!(live[0].urls[0], "https://www.nvidia.com/en-us/drivers/");
        assert_eq!(live[0].urls[2], "https://www.nvidia.cn/drivers/lookup/");
        assert_eq!(live[1].urls[2], "https://www.nvidia.com/zh-cn/geforce/drivers/");
        assert_eq!(live[1].urls.last().unwrap(), "https://www.nvidia.com/pt-br/geforce/drivers/");
    }

    #[test]
    fn preview_only_swaps_host_and_default_alias() {
        let preview = sections(DriverEnv::Preview);
        assert_eq!(preview[0].urls[0], "https://preview.nvidia.com/en-zz/drivers/");
        assert_eq!(preview[0].urls[1], "https://preview.nvidia.com/en-gb/drivers/");
        assert_eq!(preview[0].urls[2], "https://preview.nvidia.cn/drivers/lookup/");
        assert_eq!(preview[1].urls[0], "https://preview.nvidia.com/en-zz/geforce/drivers/");
        assert_eq!(preview[1].urls[7], "https://preview.nvidia.com/de-de/geforce/drivers/");
    }

    #[test]
    fn preview_maps_back_to_live() {
        let t = Transcoder::default();
        let live = sections(DriverEnv::Live);
        let preview = sections(DriverEnv::Preview);
        for (l, p) in live.iter().zip(&preview) {
            for (lu, pu) in l.urls.iter().zip(&p.urls) {
                assert_eq!(&t.preview_to_live(pu).unwrap(), lu);
            }
        }
    }

    #[test]
    fn origin_portal_pages() {
        let origin = sections(DriverEnv::Origin);
        assert_eq!(origin[0].title, "Index");
        assert_eq!(
            origin[0].urls[0],
            "https://origin-aws-prod-us.nvidia.com/download/index.aspx?lang=en-us"
        );
        assert_eq!(
            origin[1].urls[2],
            "https://origin-aws-prod-de.nvidia.com/download/Find.aspx?lang=de"
        );
        assert_eq!(origin[0].urls.last().unwrap(), "https://origin-aws-prod-tr.nvidia.com/drivers");
        assert_eq!(
            origin[1].urls.last().unwrap(),
            "https://origin-aws-prod-tr.nvidia.com/drivers/beta"
        );
        assert_eq!(origin[0].urls.len(), ORIGIN_SITES.len() + 1);
    }

    #[test]
    fn parse_env_names() {
        assert_eq!("Preview".parse::<DriverEnv>(), Ok(DriverEnv::Preview));
        assert_eq!("origin".parse::<DriverEnv>(), Ok(DriverEnv::Origin));
        assert!("author".parse::<DriverEnv>().is_err());
    }
}
