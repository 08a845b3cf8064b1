// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Host services the viewer depends on.
//!
//! The controller only talks to the windowing layer through this trait,
//! which keeps the state transitions testable without a running UI.

/// Viewport query and external link opening.
pub trait Platform {
    /// Current viewport width in logical pixels.
    fn viewport_width(&self) -> f32;

    /// Open `url` in a new browser tab or external handler.
    fn open_in_new_tab(&self, url: &str);
}

impl Platform for egui::Context {
    fn viewport_width(&self) -> f32 {
        self.screen_rect().width()
    }

    fn open_in_new_tab(&self, url: &str) {
        log::info!("Opening {}", url);
        self.open_url(egui::OpenUrl::new_tab(url));
    }
}

/// Whether a pointer press landed outside every region in `regions`.
pub fn pressed_outside(pressed_at: Option<egui::Pos2>, regions: &[egui::Rect]) -> bool {
    match pressed_at {
        Some(pos) => !regions.iter().any(|region| region.contains(pos)),
        None => false,
    }
}

#[cfg(test)]
pub mod testing {
    use super::Platform;
    use std::cell::RefCell;

    /// Records opened links; width is set by the test.
    pub struct FakePlatform {
        pub width: f32,
        pub opened: RefCell<Vec<String>>,
    }

    impl FakePlatform {
        pub fn with_width(width: f32) -> Self {
            Self {
                width,
                opened: RefCell::new(Vec::new()),
            }
        }
    }

    impl Platform for FakePlatform {
        fn viewport_width(&self) -> f32 {
            self.width
        }

        fn open_in_new_tab(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_outside() {
        let popover = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 50.0));
        let trigger = egui::Rect::from_min_size(egui::pos2(0.0, 60.0), egui::vec2(40.0, 20.0));

        assert!(!pressed_outside(None, &[popover, trigger]));
        assert!(!pressed_outside(Some(egui::pos2(10.0, 10.0)), &[popover, trigger]));
        assert!(!pressed_outside(Some(egui::pos2(10.0, 70.0)), &[popover, trigger]));
        assert!(pressed_outside(Some(egui::pos2(200.0, 10.0)), &[popover, trigger]));
    }
}
