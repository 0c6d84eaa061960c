//! Reveal Controller
//!
//! Scroll-triggered entrance for page sections. Each observed element goes
//! `Pending -> Revealed` exactly once, the first time at least
//! [`REVEAL_THRESHOLD`] of it is inside the viewport, and is then dropped
//! from observation. Teardown cancels whatever is still pending.
//!
//! The controller is host-agnostic: intersection notifications are fed in by
//! whoever owns the viewport. Browsers get the same rules through
//! [`client_script`], which the page templates inline.

use rustc_hash::FxHashSet;

/// Fraction of an element's box that must be visible to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Attribute marking elements the client script observes.
pub const REVEAL_ATTRIBUTE: &str = "data-reveal";

/// Class added to an element when it is revealed.
pub const REVEALED_CLASS: &str = "animate-in";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// A pending element crossed the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealed {
    pub id: String,
}

/// One viewport-intersection notification.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionEntry<'a> {
    pub id: &'a str,
    pub visible_ratio: f64,
}

#[derive(Debug, Default)]
pub struct RevealController {
    observed: FxHashSet<String>,
    revealed: FxHashSet<String>,
    torn_down: bool,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching an element. Returns false if the element is already
    /// known (pending or revealed) or the controller was torn down.
    pub fn observe(&mut self, id: &str) -> bool {
        if self.torn_down || self.revealed.contains(id) {
            return false;
        }
        self.observed.insert(id.to_string())
    }

    /// Feed one intersection notification.
    ///
    /// Fires at most once per element; later crossings, unknown ids and
    /// anything after teardown are ignored.
    pub fn notify(&mut self, id: &str, visible_ratio: f64) -> Option<Revealed> {
        if self.torn_down || visible_ratio.is_nan() || visible_ratio < REVEAL_THRESHOLD {
            return None;
        }
        if !self.observed.remove(id) {
            return None;
        }
        self.revealed.insert(id.to_string());
        tracing::trace!("Revealed {}", id);
        Some(Revealed { id: id.to_string() })
    }

    /// Feed a batch of notifications in delivery order.
    pub fn notify_all<'a, I>(&mut self, entries: I) -> Vec<Revealed>
    where
        I: IntoIterator<Item = IntersectionEntry<'a>>,
    {
        entries
            .into_iter()
            .filter_map(|entry| self.notify(entry.id, entry.visible_ratio))
            .collect()
    }

    pub fn state(&self, id: &str) -> Option<RevealState> {
        if self.revealed.contains(id) {
            Some(RevealState::Revealed)
        } else if self.observed.contains(id) {
            Some(RevealState::Pending)
        } else {
            None
        }
    }

    pub fn pending_count(&self) -> usize {
        self.observed.len()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Cancel every pending observation. Returns how many were cancelled.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.observed.len();
        self.observed.clear();
        self.torn_down = true;
        if cancelled > 0 {
            tracing::debug!("Reveal teardown cancelled {} pending observations", cancelled);
        }
        cancelled
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        if !self.torn_down {
            self.teardown();
        }
    }
}

/// Browser side of the controller, inlined at the end of every page.
///
/// Observes every `[data-reveal]` element, adds the revealed class on the
/// first qualifying intersection, unobserves it, and disconnects the
/// observer when the page is hidden.
pub fn client_script() -> String {
    format!(
        r#"(function () {{
  var threshold = {threshold};
  if (!('IntersectionObserver' in window)) {{
    document.querySelectorAll('[{attr}]').forEach(function (el) {{ el.classList.add('{class}'); }});
    return;
  }}
  var observer = new IntersectionObserver(function (entries) {{
    entries.forEach(function (entry) {{
      if (entry.isIntersecting && entry.intersectionRatio >= threshold) {{
        entry.target.classList.add('{class}');
        observer.unobserve(entry.target);
      }}
    }});
  }}, {{ threshold: threshold }});
  document.querySelectorAll('[{attr}]').forEach(function (el) {{ observer.observe(el); }});
  window.addEventListener('pagehide', function () {{ observer.disconnect(); }}, {{ once: true }});
}})();"#,
        threshold = REVEAL_THRESHOLD,
        attr = REVEAL_ATTRIBUTE,
        class = REVEALED_CLASS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_once() {
        let mut controller = RevealController::new();
        assert!(controller.observe("hero"));
        assert_eq!(controller.state("hero"), Some(RevealState::Pending));

        let first = controller.notify("hero", 0.25);
        assert_eq!(first, Some(Revealed { id: "hero".to_string() }));
        assert_eq!(controller.state("hero"), Some(RevealState::Revealed));

        // Scrolled away and back: no second transition, state unchanged.
        assert_eq!(controller.notify("hero", 0.0), None);
        assert_eq!(controller.notify("hero", 0.8), None);
        assert_eq!(controller.state("hero"), Some(RevealState::Revealed));
        assert_eq!(controller.pending_count(), 0);
    }

    #[test]
    fn test_below_threshold_stays_pending() {
        let mut controller = RevealController::new();
        controller.observe("faq");

        assert_eq!(controller.notify("faq", 0.05), None);
        assert_eq!(controller.state("faq"), Some(RevealState::Pending));

        assert!(controller.notify("faq", REVEAL_THRESHOLD).is_some());
    }

    #[test]
    fn test_nan_ratio_does_not_reveal() {
        let mut controller = RevealController::new();
        controller.observe("hero");

        assert_eq!(controller.notify("hero", f64::NAN), None);
        assert_eq!(controller.state("hero"), Some(RevealState::Pending));
        assert_eq!(controller.pending_count(), 1);
    }

    #[test]
    fn test_unobserved_ids_are_ignored() {
        let mut controller = RevealController::new();
        assert_eq!(controller.notify("ghost", 1.0), None);
        assert_eq!(controller.state("ghost"), None);
    }

    #[test]
    fn test_revealed_element_cannot_be_reobserved() {
        let mut controller = RevealController::new();
        controller.observe("cta");
        controller.notify("cta", 1.0);
        assert!(!controller.observe("cta"));
        assert_eq!(controller.state("cta"), Some(RevealState::Revealed));
    }

    #[test]
    fn test_teardown_cancels_pending() {
        let mut controller = RevealController::new();
        controller.observe("a");
        controller.observe("b");
        controller.notify("a", 0.5);

        assert_eq!(controller.teardown(), 1);
        assert!(controller.is_torn_down());
        assert_eq!(controller.notify("b", 1.0), None);
        assert_eq!(controller.state("b"), None);
        assert!(!controller.observe("c"));
    }

    #[test]
    fn test_batch_in_delivery_order() {
        let mut controller = RevealController::new();
        for id in ["one", "two", "three"] {
            controller.observe(id);
        }

        let revealed = controller.notify_all([
            IntersectionEntry { id: "three", visible_ratio: 0.4 },
            IntersectionEntry { id: "one", visible_ratio: 0.02 },
            IntersectionEntry { id: "two", visible_ratio: 0.9 },
            IntersectionEntry { id: "three", visible_ratio: 1.0 },
        ]);

        let ids: Vec<&str> = revealed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["three", "two"]);
        assert_eq!(controller.pending_count(), 1);
    }

    #[test]
    fn test_client_script_uses_shared_constants() {
        let script = client_script();
        assert!(script.contains("var threshold = 0.1;"));
        assert!(script.contains("[data-reveal]"));
        assert!(script.contains("observer.unobserve(entry.target)"));
        assert!(script.contains("observer.disconnect()"));
    }
}
