// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Story image composition.

pub mod canvas;
pub mod highlight;
pub mod layout;
pub mod route;
pub mod summary;
pub mod top_k;

pub use canvas::{FontWeight, Fonts};
pub use highlight::HighlightRenderer;
pub use route::{render_route, RouteProjection, RouteStyle};
pub use summary::SummaryRenderer;
pub use top_k::render_top_k;
