//! Rendering module: document model to presentation tree.

mod annotate;
mod asset;
mod entry;
mod list;
mod rendered;
mod renderer;

pub use annotate::{EditAnnotator, EditContext, NoopAnnotator, OverlayAnnotator};
pub use asset::{resolve_asset_url, ASSET_PROCESSING_TEXT};
pub use entry::{EntryRegistry, EntryResolver, GalleryResolver, UNKNOWN_ENTRY_TEXT};
pub use list::normalize_list_item;
pub use rendered::{to_json, JsonFormat, RenderedChild, RenderedNode};
pub use renderer::{InlineTransform, NodeTransform, Renderer, RendererBuilder};
