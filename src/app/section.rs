// SPDX-License-Identifier: MPL-2.0
//! Sections of the single page the user can jump to.

use iced::widget::scrollable::RelativeOffset;

/// Anchor targets for scroll-to-section navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Experience,
    Portfolio,
    Contact,
}

impl Section {
    /// Scroll offset of the section within the page, relative to the full
    /// scrollable height. Tuned to the section order and rough heights of
    /// the rendered page.
    pub fn anchor(self) -> RelativeOffset {
        let y = match self {
            Section::About => 0.14,
            Section::Skills => 0.33,
            Section::Experience => 0.52,
            Section::Portfolio => 0.68,
            Section::Contact => 1.0,
        };
        RelativeOffset { x: 0.0, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_follow_page_order() {
        let sections = [
            Section::About,
            Section::Skills,
            Section::Experience,
            Section::Portfolio,
            Section::Contact,
        ];
        for pair in sections.windows(2) {
            assert!(pair[0].anchor().y < pair[1].anchor().y);
        }
    }

    #[test]
    fn anchors_stay_in_range() {
        for section in [Section::About, Section::Contact] {
            let offset = section.anchor();
            assert!((0.0..=1.0).contains(&offset.y));
            assert_eq!(offset.x, 0.0);
        }
    }
}
