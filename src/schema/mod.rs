//! Provider schema index.
//!
//! Parses `terraform providers schema -json` output into a tree of blocks and
//! attributes and answers two questions about any path into a resource's
//! value tree: is the value user-authored ([`Block::classify`]), and is
//! it an order-insignificant collection ([`Block::is_set`]).

mod index;
mod types;

pub use index::{PathClass, SchemaIndex};
pub use types::{
    Attribute, AttributeType, Block, NestedAttributes, NestedBlock, NestingMode, ProviderSchema,
    ProviderSchemas, ResourceSchema,
};
