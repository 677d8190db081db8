//! Venn Core Types and Definitions
//!
//! Foundational types shared by the Venn diagram crates:
//!
//! - **Identifiers**: string-interned region ids ([`identifier::Id`])
//! - **Geometry**: points, sizes and bounds on the canvas ([`geometry`])
//! - **Scales**: the qualitative relative-value and stage axes ([`scale`])
//! - **Ellipses**: the labeled region record ([`ellipse::Ellipse`])
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Draw**: layered SVG drawing primitives ([`draw`])

pub mod color;
pub mod draw;
pub mod ellipse;
pub mod geometry;
pub mod identifier;
pub mod scale;
