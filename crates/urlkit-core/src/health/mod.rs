//! Link health resolver.
//!
//! Probes each URL with a header-only request (redirects not followed),
//! follows at most one `301` hop, and groups the outcomes. Transport
//! failures become the `Error` outcome for that URL and never stop the
//! batch. There are no retries.

mod outcome;
mod parse;
mod probe;

pub use outcome::{StatusGroup, StatusGroups, StatusOutcome, UrlStatus, PERMANENT_REDIRECT};
pub use probe::{classify_curl_error, CurlProbe, FailureKind, HeadResponse, Probe, ProbeError};

use std::collections::VecDeque;
use std::sync::{mpsc, Mutex};
use std::time::{Duration, Instant};

/// Result of one batch, handed to the report renderers.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub groups: StatusGroups,
    pub elapsed: Duration,
    /// Number of URLs checked.
    pub checked: usize,
}

/// Runs HEAD checks through a [`Probe`].
#[derive(Debug, Clone)]
pub struct LinkHealthResolver<P> {
    probe: P,
    jobs: usize,
}

impl<P: Probe> LinkHealthResolver<P> {
    pub fn new(probe: P) -> Self {
        Self { probe, jobs: 1 }
    }

    /// Check up to `jobs` URLs at once (minimum 1). Grouping is identical to
    /// the sequential run for the same input.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Resolve one URL: `Pending -> Resolved(code) | Resolved(chain) | Failed`.
    pub fn check_url(&self, url: &str) -> UrlStatus {
        let first = match self.probe.head(url) {
            Ok(r) => r,
            Err(e) => return failed(url, &e),
        };
        tracing::debug!("HEAD {} -> {}", url, first.status);

        if first.status != PERMANENT_REDIRECT {
            return UrlStatus {
                display: url.to_string(),
                outcome: StatusOutcome::Status(first.status),
            };
        }
        let Some(location) = first.location else {
            return UrlStatus {
                display: url.to_string(),
                outcome: StatusOutcome::Status(PERMANENT_REDIRECT),
            };
        };

        let target = resolve_location(url, &location);
        match self.probe.head(&target) {
            Ok(second) => {
                tracing::debug!("HEAD {} -> {}", target, second.status);
                UrlStatus {
                    display: format!("{url} -> {target}"),
                    outcome: StatusOutcome::Redirected(second.status),
                }
            }
            Err(e) => failed(url, &e),
        }
    }
}

impl<P: Probe + Sync> LinkHealthResolver<P> {
    /// Check every URL and group the outcomes, measuring wall-clock time.
    pub fn check_batch<S: AsRef<str> + Sync>(&self, urls: &[S]) -> BatchReport {
        let start = Instant::now();
        let statuses = if self.jobs > 1 && urls.len() > 1 {
            self.check_parallel(urls)
        } else {
            urls.iter().map(|u| self.check_url(u.as_ref())).collect()
        };
        let elapsed = start.elapsed();
        tracing::info!(
            "checked {} URLs in {:.2}s",
            statuses.len(),
            elapsed.as_secs_f64()
        );
        BatchReport {
            checked: statuses.len(),
            groups: statuses.into_iter().collect(),
            elapsed,
        }
    }

    /// Worker pool over a shared queue; results are re-ordered by input index.
    fn check_parallel<S: AsRef<str> + Sync>(&self, urls: &[S]) -> Vec<UrlStatus> {
        let count = urls.len();
        let work: Mutex<VecDeque<usize>> = Mutex::new((0..count).collect());
        let num_workers = self.jobs.min(count);
        let (tx, rx) = mpsc::channel::<(usize, UrlStatus)>();

        std::thread::scope(|scope| {
            for _ in 0..num_workers {
                let tx = tx.clone();
                let work = &work;
                scope.spawn(move || loop {
                    let next = match work.lock() {
                        Ok(mut queue) => queue.pop_front(),
                        Err(_) => None,
                    };
                    let Some(index) = next else { break };
                    let status = self.check_url(urls[index].as_ref());
                    if tx.send((index, status)).is_err() {
                        break;
                    }
                });
            }
        });
        drop(tx);

        let mut slots: Vec<Option<UrlStatus>> = vec![None; count];
        for (index, status) in rx {
            slots[index] = Some(status);
        }
        slots
            .into_iter()
            .zip(urls)
            .map(|(slot, url)| {
                slot.unwrap_or_else(|| UrlStatus {
                    display: url.as_ref().to_string(),
                    outcome: StatusOutcome::Error,
                })
            })
            .collect()
    }
}

fn failed(url: &str, e: &ProbeError) -> UrlStatus {
    tracing::warn!("HEAD {} failed ({:?}): {}", url, e.kind(), e);
    UrlStatus {
        display: url.to_string(),
        outcome: StatusOutcome::Error,
    }
}

/// Absolute redirect target; relative `Location` values are joined onto the
/// request URL.
fn resolve_location(base: &str, location: &str) -> String {
    if url::Url::parse(location).is_ok() {
        return location.to_string();
    }
    url::Url::parse(base)
        .and_then(|b| b.join(location))
        .map(String::from)
        .unwrap_or_else(|_| location.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Canned responses; URLs missing from the map fail like a timeout.
    #[derive(Default)]
    struct CannedProbe {
        responses: HashMap<String, HeadResponse>,
    }

    impl CannedProbe {
        fn with(mut self, url: &str, response: HeadResponse) -> Self {
            self.responses.insert(url.to_string(), response);
            self
        }
    }

    impl Probe for CannedProbe {
        fn head(&self, url: &str) -> Result<HeadResponse, ProbeError> {
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| ProbeError::Transport(format!("timed out: {url}")))
        }
    }

    fn canned() -> CannedProbe {
        CannedProbe::default()
            .with("https://a/ok", HeadResponse::new(200))
            .with("https://a/gone", HeadResponse::new(404))
            .with("https://a/moved", HeadResponse::redirect(301, "https://x"))
            .with("https://x", HeadResponse::new(200))
            .with("https://a/bare301", HeadResponse::new(301))
            .with("https://a/temp", HeadResponse::redirect(302, "https://x"))
            .with("https://a/dead-end", HeadResponse::redirect(301, "https://nowhere"))
            .with("https://a/rel", HeadResponse::redirect(301, "/de-de/"))
            .with("https://a/de-de/", HeadResponse::new(200))
    }

    #[test]
    fn redirect_chain_formatting() {
        let r = LinkHealthResolver::new(canned());
        let s = r.check_url("https://a/moved");
        assert_eq!(s.outcome.to_string(), "301 -> 200");
        assert_eq!(s.display, "https://a/moved -> https://x");
    }

    #[test]
    fn bare_301_without_location() {
        let r = LinkHealthResolver::new(canned());
        assert_eq!(r.check_url("https://a/bare301").outcome, StatusOutcome::Status(301));
    }

    #[test]
    fn other_redirects_are_not_followed() {
        let r = LinkHealthResolver::new(canned());
        let s = r.check_url("https://a/temp");
        assert_eq!(s.outcome, StatusOutcome::Status(302));
        assert_eq!(s.display, "https://a/temp");
    }

    #[test]
    fn second_hop_failure_is_error() {
        let r = LinkHealthResolver::new(canned());
        let s = r.check_url("https://a/dead-end");
        assert_eq!(s.outcome, StatusOutcome::Error);
        assert_eq!(s.display, "https://a/dead-end");
    }

    #[test]
    fn relative_location_is_joined() {
        let r = LinkHealthResolver::new(canned());
        let s = r.check_url("https://a/rel");
        assert_eq!(s.outcome, StatusOutcome::Redirected(200));
        assert_eq!(s.display, "https://a/rel -> https://a/de-de/");
    }

    #[test]
    fn failure_isolation() {
        let r = LinkHealthResolver::new(canned());
        let report = r.check_batch(&["https://a/ok", "https://a/timeout", "https://a/gone"]);
        assert_eq!(report.checked, 3);
        assert_eq!(report.groups.get(&StatusOutcome::Status(200)).unwrap(), ["https://a/ok"]);
        assert_eq!(report.groups.get(&StatusOutcome::Error).unwrap(), ["https://a/timeout"]);
        assert_eq!(report.groups.get(&StatusOutcome::Status(404)).unwrap(), ["https://a/gone"]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let urls = [
            "https://a/gone",
            "https://a/ok",
            "https://a/moved",
            "https://a/missing",
            "https://a/ok",
        ];
        let r = LinkHealthResolver::new(canned());
        let first = r.check_batch(&urls);
        let second = r.check_batch(&urls);
        assert_eq!(first.groups, second.groups);
        let order: Vec<String> = first.groups.iter().map(|g| g.status.to_string()).collect();
        assert_eq!(order, ["404", "200", "301 -> 200", "Error"]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let urls: Vec<String> = (0..40)
            .map(|i| match i % 5 {
                0 => "https://a/ok".to_string(),
                1 => "https://a/gone".to_string(),
                2 => "https://a/moved".to_string(),
                3 => format!("https://a/unknown/{i}"),
                _ => "https://a/rel".to_string(),
            })
            .collect();
        let probe = canned();
        let sequential = LinkHealthResolver::new(&probe).check_batch(&urls);
        let parallel = LinkHealthResolver::new(&probe).with_jobs(8).check_batch(&urls);
        assert_eq!(sequential.groups, parallel.groups);
        assert_eq!(parallel.checked, 40);
    }

    #[test]
    fn absolute_location_kept_verbatim() {
        assert_eq!(resolve_location("https://a/moved", "https://x"), "https://x");
        assert_eq!(resolve_location("https://a/b/c", "d"), "https://a/b/d");
    }

    #[test]
    fn empty_batch() {
        let report = LinkHealthResolver::new(canned()).with_jobs(4).check_batch::<&str>(&[]);
        assert!(report.groups.is_empty());
        assert_eq!(report.checked, 0);
    }
}
