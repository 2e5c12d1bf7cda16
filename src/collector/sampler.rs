//! Walks the registry once per cycle and collects one result per module.

use tracing::trace;

use crate::collector::component::{CollectError, Component, Sources};
use crate::collector::procfs::CpuTimes;
use crate::collector::traits::FileSystem;
use crate::config::UNKNOWN_STR;
use crate::registry::Registry;

/// Outcome of sampling one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleResult {
    Value(String),
    /// The component had nothing to report this cycle.
    Unknown,
}

impl SampleResult {
    /// Text to render, substituting the unknown marker.
    pub fn text(&self) -> &str {
        match self {
            SampleResult::Value(v) => v,
            SampleResult::Unknown => UNKNOWN_STR,
        }
    }
}

/// Samples every module of a registry in order.
///
/// Failures stay local to their module: they are logged at trace level and
/// rendered as [`SampleResult::Unknown`]. There are no retries and no
/// timeouts; a slow source delays the whole cycle.
pub struct Sampler<F: FileSystem> {
    sources: Sources<F>,
    /// Previous `/proc/stat` reading per registry slot, for `CpuPerc`.
    cpu_prev: Vec<Option<CpuTimes>>,
}

impl<F: FileSystem> Sampler<F> {
    pub fn new(fs: F, proc_path: impl Into<String>, sys_path: impl Into<String>) -> Self {
        Self {
            sources: Sources::new(fs, proc_path, sys_path),
            cpu_prev: Vec::new(),
        }
    }

    /// Samples all modules in registry order.
    pub fn sample_all(&mut self, registry: &Registry) -> Vec<SampleResult> {
        if self.cpu_prev.len() != registry.len() {
            self.cpu_prev = vec![None; registry.len()];
        }

        registry
            .iter()
            .enumerate()
            .map(|(slot, module)| {
                match self.sample(slot, module.component()) {
                    Ok(value) => SampleResult::Value(value),
                    Err(e) => {
                        trace!(module = module.component().name(), slot, "sample absent: {}", e);
                        SampleResult::Unknown
                    }
                }
            })
            .collect()
    }

    fn sample(&mut self, slot: usize, component: &Component) -> Result<String, CollectError> {
        if let Component::CpuPerc = component {
            let now = self.sources.cpu_times()?;
            let prev = self.cpu_prev[slot].replace(now);
            return prev
                .and_then(|prev| now.busy_percent_since(&prev))
                .map(|p| p.to_string())
                .ok_or(CollectError::Unavailable("cpu history"));
        }
        self.sources.read(component)
    }

    /// Mutable access to the underlying sources, used by tests that change
    /// the mock filesystem between cycles.
    #[cfg(test)]
    pub(crate) fn sources_mut(&mut self) -> &mut Sources<F> {
        &mut self.sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockFs;
    use crate::registry::ModuleDescriptor;

    fn registry(components: Vec<Component>) -> Registry {
        let modules = components
            .into_iter()
            .map(|c| ModuleDescriptor::new(c, "%s").unwrap())
            .collect();
        Registry::new(modules).unwrap()
    }

    #[test]
    fn test_results_follow_registry_order() {
        let reg = registry(vec![
            Component::Hostname,
            Component::Literal("|".into()),
            Component::LoadAvg,
        ]);
        let mut sampler = Sampler::new(MockFs::typical_laptop(), "/proc", "/sys");

        let results = sampler.sample_all(&reg);
        let texts: Vec<&str> = results.iter().map(SampleResult::text).collect();
        assert_eq!(texts, vec!["thinkpad", "|", "0.15 0.10 0.05"]);
    }

    #[test]
    fn test_absent_value_uses_unknown_marker() {
        let reg = registry(vec![Component::BatteryPerc(None), Component::Hostname]);
        let mut sampler = Sampler::new(MockFs::bare_server(), "/proc", "/sys");

        let results = sampler.sample_all(&reg);
        assert_eq!(results[0], SampleResult::Unknown);
        assert_eq!(results[0].text(), UNKNOWN_STR);
        assert_eq!(results[1], SampleResult::Value("db-01".into()));
    }

    #[test]
    fn test_cpu_perc_needs_two_readings() {
        let reg = registry(vec![Component::CpuPerc]);
        let mut sampler = Sampler::new(MockFs::typical_laptop(), "/proc", "/sys");

        assert_eq!(sampler.sample_all(&reg), vec![SampleResult::Unknown]);

        // 300 busy jiffies out of 400 since the first reading.
        let mut fs = MockFs::typical_laptop();
        fs.add_file("/proc/stat", "cpu  10300 500 3000 80100 1000 200 100 0 0 0\n");
        *sampler.sources_mut() = Sources::new(fs, "/proc", "/sys");

        assert_eq!(
            sampler.sample_all(&reg),
            vec![SampleResult::Value("75".into())]
        );
    }

    #[test]
    fn test_cpu_history_is_per_slot() {
        let reg = registry(vec![Component::CpuPerc, Component::CpuPerc]);
        let mut sampler = Sampler::new(MockFs::typical_laptop(), "/proc", "/sys");

        sampler.sample_all(&reg);
        let mut fs = MockFs::typical_laptop();
        fs.add_file("/proc/stat", "cpu  10100 500 3000 80100 1000 200 100 0 0 0\n");
        *sampler.sources_mut() = Sources::new(fs, "/proc", "/sys");

        let results = sampler.sample_all(&reg);
        assert_eq!(results[0], results[1]);
        assert_eq!(results[0], SampleResult::Value("50".into()));
    }

    #[test]
    fn test_vanished_source_degrades_to_unknown() {
        let reg = registry(vec![Component::Temp(
            "/sys/class/thermal/thermal_zone0/temp".into(),
        )]);
        let mut fs = MockFs::typical_laptop();
        fs.remove_file("/sys/class/thermal/thermal_zone0/temp");
        let mut sampler = Sampler::new(fs, "/proc", "/sys");

        assert_eq!(sampler.sample_all(&reg), vec![SampleResult::Unknown]);
    }
}
