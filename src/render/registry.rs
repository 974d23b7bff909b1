//! Visualization registry
//!
//! Arena of live chart widgets keyed by mount-point id. Rendering at a mount
//! point disposes whatever widget was bound there before constructing the
//! replacement, so repeated analyses never accumulate or leak widgets.

use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::{DashMap, DashSet};
use tracing::trace;

use crate::render::chart::ChartSpec;

/// One live chart widget.
///
/// Implementations hold whatever underlying resources the rendering target
/// needs; `dispose` must release them and is called exactly once, before the
/// widget is replaced or when the registry is torn down.
pub trait Widget: Send + Sync {
    fn spec(&self) -> &ChartSpec;
    fn dispose(&mut self);
}

/// Constructs widgets for the registry.
pub trait WidgetFactory: Send + Sync {
    fn create(&self, mount_id: &str, spec: ChartSpec) -> Box<dyn Widget>;
}

/// Default widget: retains the spec, nothing external to release.
struct SpecWidget {
    spec: ChartSpec,
}

impl Widget for SpecWidget {
    fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    fn dispose(&mut self) {}
}

struct SpecWidgetFactory;

impl WidgetFactory for SpecWidgetFactory {
    fn create(&self, _mount_id: &str, spec: ChartSpec) -> Box<dyn Widget> {
        Box::new(SpecWidget { spec })
    }
}

/// Per mount-point widget lifecycle manager.
///
/// Guarantees at most one live widget per mount point: `render` disposes any
/// prior widget before binding the new one, and rendering at an unregistered
/// mount point is a no-op.
pub struct VisualizationRegistry {
    mounts: DashSet<String>,
    live: DashMap<String, Box<dyn Widget>>,
    factory: Box<dyn WidgetFactory>,
    disposed: AtomicUsize,
}

impl VisualizationRegistry {
    pub fn new() -> Self {
        Self::with_factory(Box::new(SpecWidgetFactory))
    }

    pub fn with_factory(factory: Box<dyn WidgetFactory>) -> Self {
        Self {
            mounts: DashSet::new(),
            live: DashMap::new(),
            factory,
            disposed: AtomicUsize::new(0),
        }
    }

    /// Declares a mount point as present in the view.
    pub fn register_mount(&self, mount_id: &str) {
        self.mounts.insert(mount_id.to_string());
    }

    /// Renders a chart at a mount point, replacing any prior widget.
    pub fn render(&self, mount_id: &str, spec: ChartSpec) {
        if !self.mounts.contains(mount_id) {
            trace!(mount_id, "render skipped: mount point not in view");
            return;
        }
        if let Some((_, mut prior)) = self.live.remove(mount_id) {
            prior.dispose();
            self.disposed.fetch_add(1, Ordering::SeqCst);
        }
        self.live
            .insert(mount_id.to_string(), self.factory.create(mount_id, spec));
    }

    /// Spec of the widget currently bound at a mount point, if any.
    pub fn spec(&self, mount_id: &str) -> Option<ChartSpec> {
        self.live.get(mount_id).map(|widget| widget.spec().clone())
    }

    /// Number of currently live widgets.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total number of widgets disposed so far.
    pub fn disposed_count(&self) -> usize {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Disposes every live widget. Used on teardown of the owning view.
    pub fn dispose_all(&self) {
        let ids: Vec<String> = self.live.iter().map(|e| e.key().clone()).collect();
        for id in ids {
            if let Some((_, mut widget)) = self.live.remove(&id) {
                widget.dispose();
                self.disposed.fetch_add(1, Ordering::SeqCst);
            }
        }
    }
}

impl Default for VisualizationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VisualizationRegistry {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::chart::ChartSpec;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    struct CountingWidget {
        spec: ChartSpec,
        disposals: Arc<AtomicUsize>,
    }

    impl Widget for CountingWidget {
        fn spec(&self) -> &ChartSpec {
            &self.spec
        }

        fn dispose(&mut self) {
            self.disposals.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct CountingFactory {
        disposals: Arc<AtomicUsize>,
    }

    impl WidgetFactory for CountingFactory {
        fn create(&self, _mount_id: &str, spec: ChartSpec) -> Box<dyn Widget> {
            Box::new(CountingWidget {
                spec,
                disposals: self.disposals.clone(),
            })
        }
    }

    fn donut() -> ChartSpec {
        ChartSpec::doughnut(vec!["a".into()], vec![1.0])
    }

    #[test]
    fn test_repeated_render_leaves_one_widget() {
        let registry = VisualizationRegistry::new();
        registry.register_mount("budget.donut");

        registry.render("budget.donut", donut());
        registry.render("budget.donut", donut());
        registry.render("budget.donut", donut());

        assert_eq!(registry.live_count(), 1);
        assert_eq!(registry.disposed_count(), 2);
    }

    #[test]
    fn test_prior_widget_disposed_before_replacement() {
        let disposals = Arc::new(AtomicUsize::new(0));
        let registry = VisualizationRegistry::with_factory(Box::new(CountingFactory {
            disposals: disposals.clone(),
        }));
        registry.register_mount("m");

        registry.render("m", donut());
        assert_eq!(disposals.load(Ordering::SeqCst), 0);
        registry.render("m", donut());
        assert_eq!(disposals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_mount_is_a_noop() {
        let registry = VisualizationRegistry::new();
        registry.render("missing", donut());
        assert_eq!(registry.live_count(), 0);
        assert!(registry.spec("missing").is_none());
    }

    #[test]
    fn test_dispose_all_releases_everything() {
        let disposals = Arc::new(AtomicUsize::new(0));
        let registry = VisualizationRegistry::with_factory(Box::new(CountingFactory {
            disposals: disposals.clone(),
        }));
        registry.register_mount("a");
        registry.register_mount("b");
        registry.render("a", donut());
        registry.render("b", donut());

        registry.dispose_all();
        assert_eq!(registry.live_count(), 0);
        assert_eq!(disposals.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_spec_reflects_latest_render() {
        let registry = VisualizationRegistry::new();
        registry.register_mount("m");
        registry.render("m", donut());
        let replacement = ChartSpec::doughnut(vec!["b".into()], vec![2.0]);
        registry.render("m", replacement.clone());
        assert_eq!(registry.spec("m"), Some(replacement));
    }
}
