//! Cosmic backdrop
//!
//! Tags the body with the theme class and scatters a fixed batch of
//! twinkling stars into a container prepended to the body. All DOM writes
//! go through [`Surface`] so the decorator can run against a test double.

use rand::Rng;

use crate::error::Result;

/// Class added to `<body>`
pub const THEME_CLASS: &str = "cosmic-theme";
/// Id of the star container
pub const BACKDROP_ID: &str = "cosmic-bg";
/// Class of each star element
pub const STAR_CLASS: &str = "cosmic-star";
/// Stars created per decoration pass
pub const STAR_COUNT: usize = 200;

/// Upper bound (exclusive) of the horizontal/vertical position, in percent
pub const MAX_POSITION: f64 = 100.0;
/// Upper bound (exclusive) of star width/height, in px
pub const MAX_SIZE: f64 = 3.0;
/// Upper bound (exclusive) of the twinkle animation delay, in seconds
pub const MAX_DELAY: f64 = 4.0;

/// Rendering boundary for the decorator
pub trait Surface {
    /// Handle to a created container
    type Node;

    fn add_body_class(&mut self, class: &str) -> Result<()>;

    /// Create a `<div id=..>` and insert it as the body's first child
    fn prepend_container(&mut self, id: &str) -> Result<Self::Node>;

    /// Append a `<div class=.. style=..>` to `parent`
    fn append_decoration(&mut self, parent: &Self::Node, class: &str, style: &str) -> Result<()>;
}

/// A single decorative star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub delay: f64,
}

impl Star {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0.0..MAX_POSITION),
            y: rng.gen_range(0.0..MAX_POSITION),
            width: rng.gen_range(0.0..MAX_SIZE),
            height: rng.gen_range(0.0..MAX_SIZE),
            delay: rng.gen_range(0.0..MAX_DELAY),
        }
    }

    /// Inline style text for the star element
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; width: {}px; height: {}px; animation-delay: {}s;",
            self.x, self.y, self.width, self.height, self.delay
        )
    }
}

/// Decorate the page with the cosmic backdrop
///
/// Not idempotent: each call prepends another container with another
/// [`STAR_COUNT`] stars.
pub fn apply_theme<S, R>(surface: &mut S, rng: &mut R) -> Result<()>
where
    S: Surface,
    R: Rng + ?Sized,
{
    surface.add_body_class(THEME_CLASS)?;
    let container = surface.prepend_container(BACKDROP_ID)?;

    for _ in 0..STAR_COUNT {
        let star = Star::random(rng);
        surface.append_decoration(&container, STAR_CLASS, &star.style())?;
    }

    tracing::debug!(stars = STAR_COUNT, "cosmic backdrop applied");
    Ok(())
}
