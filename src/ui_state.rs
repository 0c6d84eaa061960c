//! Interactive UI state: navigation header and FAQ accordions.
//!
//! Each piece of state belongs to one component and changes only through
//! its own methods. The browser copy of these rules lives in
//! [`client_script`].

/// Scroll offset (px) past which the header switches to its compact look.
pub const SCROLLED_OFFSET: f64 = 10.0;

/// Viewport width (px) above which the mobile menu is closed.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

// ============================================================================
// Navigation header
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    menu_open: bool,
    open_dropdown: Option<String>,
    scrolled: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn open_dropdown(&self) -> Option<&str> {
        self.open_dropdown.as_deref()
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.open_dropdown = None;
    }

    /// Same name closes the dropdown; another name switches to it.
    pub fn toggle_dropdown(&mut self, name: &str) {
        if self.open_dropdown.as_deref() == Some(name) {
            self.open_dropdown = None;
        } else {
            self.open_dropdown = Some(name.to_string());
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLLED_OFFSET;
    }

    pub fn on_resize(&mut self, viewport_width: u32) {
        if viewport_width > DESKTOP_MIN_WIDTH && self.menu_open {
            self.menu_open = false;
        }
    }
}

/// Whether a nav link for `path` is highlighted on page `current`.
pub fn is_active(path: &str, current: &str) -> bool {
    current == path || (path != "/" && current.starts_with(path))
}

// ============================================================================
// Accordion
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionMode {
    /// At most one item open; opening another closes the first.
    Single,
    /// Items open and close independently.
    Multiple,
}

impl AccordionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccordionMode::Single => "single",
            AccordionMode::Multiple => "multiple",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState {
    mode: AccordionMode,
    open: Vec<bool>,
}

impl AccordionState {
    /// All items start collapsed.
    pub fn new(mode: AccordionMode, len: usize) -> Self {
        Self {
            mode,
            open: vec![false; len],
        }
    }

    pub fn mode(&self) -> AccordionMode {
        self.mode
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn open_indices(&self) -> Vec<usize> {
        self.open
            .iter()
            .enumerate()
            .filter_map(|(idx, open)| open.then_some(idx))
            .collect()
    }

    /// Flip one item. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.open.len() {
            return;
        }
        let now_open = !self.open[index];
        if self.mode == AccordionMode::Single && now_open {
            self.open.iter_mut().for_each(|open| *open = false);
        }
        self.open[index] = now_open;
    }
}

/// Browser side of [`NavState`] and [`AccordionState`]: the same toggle
/// rules, applied to the markup the page templates render from them.
pub fn client_script() -> String {
    format!(
        r#"(function () {{
  var header = document.querySelector('[data-site-header]');
  if (header) {{
    var menu = header.querySelector('[data-menu]');
    var menuButton = header.querySelector('[data-menu-toggle]');
    var openDropdown = null;
    var setDropdown = function (name) {{
      openDropdown = name;
      header.querySelectorAll('[data-dropdown-toggle]').forEach(function (toggle) {{
        var open = toggle.getAttribute('data-dropdown-toggle') === name;
        toggle.setAttribute('aria-expanded', open ? 'true' : 'false');
      }});
      header.querySelectorAll('[data-dropdown-panel]').forEach(function (panel) {{
        panel.hidden = panel.getAttribute('data-dropdown-panel') !== name;
      }});
    }};
    header.querySelectorAll('[data-dropdown-toggle]').forEach(function (toggle) {{
      toggle.addEventListener('click', function () {{
        var name = toggle.getAttribute('data-dropdown-toggle');
        setDropdown(openDropdown === name ? null : name);
      }});
    }});
    var setMenu = function (open) {{
      if (!menu || !menuButton) return;
      menu.hidden = !open;
      menuButton.setAttribute('aria-expanded', open ? 'true' : 'false');
      document.body.style.overflow = open ? 'hidden' : '';
      if (!open) setDropdown(null);
    }};
    if (menuButton) menuButton.addEventListener('click', function () {{ setMenu(menu.hidden); }});
    var onScroll = function () {{ header.classList.toggle('is-scrolled', window.scrollY > {scrolled}); }};
    onScroll();
    window.addEventListener('scroll', onScroll, {{ passive: true }});
    window.addEventListener('resize', function () {{ if (window.innerWidth > {desktop}) setMenu(false); }});
  }}
  document.querySelectorAll('[data-accordion]').forEach(function (accordion) {{
    var single = accordion.getAttribute('data-accordion') === 'single';
    var triggers = accordion.querySelectorAll('[data-accordion-trigger]');
    triggers.forEach(function (trigger) {{
      trigger.addEventListener('click', function () {{
        var open = trigger.getAttribute('aria-expanded') !== 'true';
        if (single && open) {{
          triggers.forEach(function (other) {{
            other.setAttribute('aria-expanded', 'false');
            document.getElementById(other.getAttribute('aria-controls')).hidden = true;
          }});
        }}
        trigger.setAttribute('aria-expanded', open ? 'true' : 'false');
        document.getElementById(trigger.getAttribute('aria-controls')).hidden = !open;
      }});
    }});
  }});
}})();"#,
        scrolled = SCROLLED_OFFSET,
        desktop = DESKTOP_MIN_WIDTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_and_resize() {
        let mut nav = NavState::new();
        assert!(!nav.menu_open());

        nav.toggle_menu();
        assert!(nav.menu_open());

        nav.on_resize(800);
        assert!(nav.menu_open());

        nav.on_resize(1280);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_dropdown_toggle() {
        let mut nav = NavState::new();
        nav.toggle_dropdown("Payroll");
        assert_eq!(nav.open_dropdown(), Some("Payroll"));

        nav.toggle_dropdown("Academy");
        assert_eq!(nav.open_dropdown(), Some("Academy"));

        nav.toggle_dropdown("Academy");
        assert_eq!(nav.open_dropdown(), None);
    }

    #[test]
    fn test_close_menu_clears_dropdown() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        nav.toggle_dropdown("Intelligence");
        nav.close_menu();
        assert_eq!(nav, NavState::new());
    }

    #[test]
    fn test_scrolled_flag() {
        let mut nav = NavState::new();
        nav.on_scroll(10.0);
        assert!(!nav.scrolled());
        nav.on_scroll(10.5);
        assert!(nav.scrolled());
        nav.on_scroll(0.0);
        assert!(!nav.scrolled());
    }

    #[test]
    fn test_is_active() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/payroll"));
        assert!(is_active("/payroll", "/payroll"));
        assert!(is_active("/payroll", "/payroll/tax-filing-services"));
        assert!(!is_active("/academy", "/payroll"));
    }

    #[test]
    fn test_single_accordion() {
        let mut faq = AccordionState::new(AccordionMode::Single, 3);
        assert!(faq.open_indices().is_empty());

        faq.toggle(0);
        faq.toggle(2);
        assert_eq!(faq.open_indices(), vec![2]);

        faq.toggle(2);
        assert!(faq.open_indices().is_empty());
    }

    #[test]
    fn test_multiple_accordion() {
        let mut faq = AccordionState::new(AccordionMode::Multiple, 3);
        faq.toggle(0);
        faq.toggle(2);
        assert_eq!(faq.open_indices(), vec![0, 2]);

        faq.toggle(0);
        assert_eq!(faq.open_indices(), vec![2]);

        faq.toggle(7);
        assert!(!faq.is_open(7));
    }

    #[test]
    fn test_client_script_mirrors_rules() {
        let script = client_script();
        assert!(script.contains("window.scrollY > 10"));
        assert!(script.contains("window.innerWidth > 1024"));
        assert!(script.contains("setDropdown(openDropdown === name ? null : name)"));
        assert!(script.contains("if (!open) setDropdown(null)"));
    }
}
