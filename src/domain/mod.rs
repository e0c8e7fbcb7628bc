//! Domain Layer
//!
//! The core of arctree: turning a flat archive listing into a navigable tree.
//!
//! ## Structure
//!
//! - `entities/` - Listing entries and the node index
//! - `value_objects/` - Path separator, archive format support
//! - `services/` - Listing parser, tree builder, name policy
//! - `ports/` - Interface to the external archive program
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the file system
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - The archive program is reached through a trait

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
