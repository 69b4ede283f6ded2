//! folio renders a portfolio site's dynamic parts.
//!
//! Two cores share one crate:
//!
//! - A timed parametric animation engine ([`Animation`]) that paints drifting radial-gradient
//!   lights and blinking dust particles into a CPU [`Surface`], driven by a [`FrameScheduler`]
//!   and a [`Clock`].
//! - A data-driven HTML renderer ([`render_experiences`]) with two adapters: build-time
//!   placeholder injection ([`ExperienceInjector`] inside a [`SitePipeline`]) and runtime
//!   hydration of the timeline container ([`hydrate`]).
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod content;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod site;

pub use crate::foundation::core::{Color, Point, Vec2, Viewport};
pub use crate::foundation::error::{FolioError, FolioResult};
pub use crate::foundation::math::{cycle_progress, wrap_unit};

pub use crate::animation::blink::{BlinkEnvelope, blink_opacity};
pub use crate::animation::clock::{Clock, ManualClock, SystemClock};
pub use crate::animation::engine::{AnimState, Animation, LoopControl, run_frames};
pub use crate::animation::gate::{GateChange, ScrollGate};
pub use crate::animation::light::{Gradient, Light, OUTER_STOP, PlacedGradient};
pub use crate::animation::particle::{Particle, ParticleSpawn};
pub use crate::animation::scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use crate::animation::trajectory::{Lerp, Pose, Trajectory};

pub use crate::content::date::{DateBound, format_bound, format_date_range, month_abbrev};
pub use crate::content::escape::escape_html;
pub use crate::content::experience::{ExperienceRecord, parse_records, records_or_empty};
pub use crate::content::render::{DEFAULT_ICON, render_experience, render_experiences};

pub use crate::render::frame::{FrameRGBA, PngSequenceWriter};
pub use crate::render::raster::{fill_disc, fill_radial_fade};
pub use crate::render::surface::Surface;

pub use crate::scene::config::{SceneConfig, default_lights};

pub use crate::site::canvas_host::CanvasHostInjector;
pub use crate::site::config::SiteConfig;
pub use crate::site::hydrate::{Container, HtmlPage, HydrateOutcome, TIMELINE_CLASS, hydrate};
pub use crate::site::inject::{EXPERIENCES_PLACEHOLDER, ExperienceInjector};
pub use crate::site::markup::{
    ElementSpan, find_by_class, find_by_id, find_by_tag, insert_first_child, replace_inner,
};
pub use crate::site::pipeline::{BuildReport, SitePipeline};
pub use crate::site::source::{DataSource, EXPERIENCES_URL_PATH, FileSource, HttpSource};
pub use crate::site::transform::DocumentTransform;
