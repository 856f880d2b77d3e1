//! Normalized scroll progress and the four page sections it is split into.

/// Upper bounds of the four sections, in normalized scroll progress.
///
/// Strictly increasing and ending at 1.0; section `i` spans
/// `[SECTION_BOUNDARIES[i - 1], SECTION_BOUNDARIES[i])` with an implicit lower
/// bound of 0 for the first one. The last section is closed at 1.0.
pub const SECTION_BOUNDARIES: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Page sections in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Contact,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Section::Hero => 0,
            Section::About => 1,
            Section::Experience => 2,
            Section::Contact => 3,
        }
    }

    /// Progress interval `(start, end)` covered by this section.
    #[inline]
    pub fn range(self) -> (f64, f64) {
        let i = self.index();
        let start = if i == 0 { 0.0 } else { SECTION_BOUNDARIES[i - 1] };
        (start, SECTION_BOUNDARIES[i])
    }

    /// Find the section containing `progress` and the local progress within it.
    ///
    /// `progress` is clamped to \[0, 1\] first (non-finite input counts as 0),
    /// so the returned local progress is always in \[0, 1\].
    pub fn locate(progress: f64) -> (Section, f64) {
        let progress = clamp_unit(progress);
        let section = Section::ALL
            .into_iter()
            .find(|s| progress < s.range().1)
            .unwrap_or(Section::Contact);
        let (start, end) = section.range();
        let local = (progress - start) / (end - start);
        (section, local.clamp(0.0, 1.0))
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }
}

/// Clamp to \[0, 1\], mapping NaN and infinities to 0.
#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Scrollable distance of a page: content height minus viewport height.
#[inline]
pub fn max_scroll(content_height: f64, viewport_height: f64) -> f64 {
    content_height - viewport_height
}

/// Normalize a scroll offset against the maximum scroll offset.
///
/// A page that cannot scroll (`max_scroll <= 0`) reports 0 instead of the
/// non-finite ratio a plain division would give.
pub fn scroll_progress(offset: f64, max_scroll: f64) -> f64 {
    if !offset.is_finite() || !max_scroll.is_finite() || max_scroll <= 0.0 {
        return 0.0;
    }
    clamp_unit(offset / max_scroll)
}
