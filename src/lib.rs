//! # apiform - Schema-Driven Request Builder
//!
//! **apiform** turns declarative endpoint schemas into editable value trees and compiles
//! those trees into concrete HTTP requests. It ships with the product directory
//! integration API catalog, but any catalog expressed in the same field vocabulary works.
//!
//! ## Core Workflow
//!
//! 1.  **Pick an endpoint**: Look it up in a [`Catalog`](schema::Catalog), either the
//!     built-in one or one parsed from JSON.
//! 2.  **Edit values**: Open a [`FormSession`](form::FormSession) and apply
//!     [`EditOp`](editor::EditOp)s addressed by field paths such as
//!     `linkGroups[0].links[1].name`. Every edit replaces a whole subtree.
//! 3.  **Compile**: `build_output()` substitutes path parameters, encodes the query
//!     string and cleans the body, producing a [`RequestDescriptor`](request::RequestDescriptor)
//!     with a JSON view and a pasteable `curl` command.
//! 4.  **Keep drafts**: Save the raw value trees through any [`DraftStore`](store::DraftStore),
//!     then export, import or reload them later.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use apiform::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let catalog = Catalog::product_directory();
//!     let endpoint = catalog.get("upsertCategory")?;
//!
//!     let mut form = FormSession::new(endpoint);
//!     form.edit_field(Section::Path, "categoryKey", EditOp::SetText("cards".into()))?;
//!     form.edit_field(Section::Body, "name", EditOp::SetText("Accounts".into()))?;
//!     form.edit(
//!         Section::Body,
//!         &"additionalDescriptions".parse::<FieldPath>()?,
//!         EditOp::Append,
//!     )?;
//!     form.edit(
//!         Section::Body,
//!         &"additionalDescriptions[0].type".parse::<FieldPath>()?,
//!         EditOp::SetText("tagline".into()),
//!     )?;
//!
//!     let request = form.build_output();
//!     println!("{}", request.command_line());
//!
//!     let mut store = MemoryStore::new();
//!     let draft = form.save(&mut store, "Accounts")?;
//!     println!("saved draft {}", draft.id);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod form;
pub mod normalize;
pub mod prelude;
pub mod request;
pub mod schema;
pub mod store;
pub mod value;
