//! Belongings Tracker Library
//!
//! This library provides a Model Context Protocol (MCP) server for keeping
//! track of a child's clothing as it moves between Dad's house, Mom's house,
//! school and the trip in between.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TrackerServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `inventory` module - Items, location rules and views
//! - **Persistence Layer**: `storage` module - Ordered write queue over a
//!   pluggable backend (TOML file by default)
//!
//! The in-memory collection is the source of truth while a session is open.
//! Backend writes happen in the background and a failure is reported on the
//! next tool response; the in-memory change is kept.
//!
//! # Example
//!
//! ```no_run
//! use belongings_tracker::{Identity, TrackerServerHandler, inventory::ViewConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let handler =
//!         TrackerServerHandler::open("items.toml", Identity::anonymous(), ViewConfig::default())
//!             .await;
//!     // Use handler with MCP server...
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatting;
mod handlers;
pub mod identity;
pub mod inventory;
pub mod session;
pub mod storage;
pub mod validation;

use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

pub use config::TrackerConfig;
pub use identity::Identity;
pub use inventory::{Category, Item, Location};
pub use session::Session;
pub use storage::{PersistenceQueue, TomlFileBackend};

/// MCP Server handler for the belongings tracker
///
/// Wraps one open [`Session`]. Every tool works on the session's in-memory
/// collection; persistence is mirrored through its queue.
pub struct TrackerServerHandler {
    pub(crate) session: Mutex<Session>,
    queue: PersistenceQueue,
}

impl TrackerServerHandler {
    pub fn new(session: Session) -> Self {
        let queue = session.queue();
        Self {
            session: Mutex::new(session),
            queue,
        }
    }

    /// Open a session backed by the TOML file at `data_file`
    ///
    /// A missing file starts an empty collection. An unreadable one also
    /// starts empty, with the failure reported on the first response.
    pub async fn open(
        data_file: impl AsRef<Path>,
        identity: Identity,
        config: inventory::ViewConfig,
    ) -> Self {
        let backend = Arc::new(TomlFileBackend::new(data_file));
        Self::new(Session::open(identity, backend, config).await)
    }

    /// Handle to the write queue, usable after the handler is gone
    pub fn persistence_queue(&self) -> PersistenceQueue {
        self.queue.clone()
    }

    pub(crate) fn session(&self) -> McpResult<MutexGuard<'_, Session>> {
        match self.session.lock() {
            Ok(guard) => Ok(guard),
            Err(_) => bail!("Session state is unavailable after an earlier failure"),
        }
    }
}

/// Tracks clothing items across four places: Dad's, Mom's, School and In Transit.
///
/// Each item has a name, optional description, category and photo, its current
/// location, and two flags:
/// - **for today**: packed or needed today
/// - **reminder**: remember to bring it back
///
/// Moving an item sets flags automatically: arriving at School turns the
/// reminder on, going In Transit marks it for today. Flags are never cleared
/// by a move; toggle them off explicitly.
///
/// Item IDs are generated by the server and returned when an item is added.
/// Locations: dads, moms, school, in_transit.
/// Categories: socks, sweaters, tshirts, pants, shoes, other.
#[mcp_server]
impl McpServer for TrackerServerHandler {
    /// **Add item**: Register a piece of clothing. Newest items are listed first.
    /// Location defaults to dads; School/In Transit set flags automatically.
    #[tool]
    async fn add_item(
        &self,
        /// Name: required, e.g. "Blue hoodie"
        name: String,
        /// Location: dads/moms/school/in_transit (optional, default dads)
        location: Option<String>,
        /// Description: free text (optional)
        description: Option<String>,
        /// Category: socks/sweaters/tshirts/pants/shoes/other (optional, default other)
        category: Option<String>,
        /// Photo: encoded image reference, e.g. a data URL (optional)
        photo: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_item(name, location, description, category, photo)
            .await
    }

    /// **Move item**: Change where an item is. Without a location the item
    /// advances one step: dads → moms → school → in_transit → dads.
    #[tool]
    async fn move_item(
        &self,
        /// ID of the item to move
        id: String,
        /// Target location: dads/moms/school/in_transit (optional, omit to cycle)
        location: Option<String>,
    ) -> McpResult<String> {
        self.handle_move_item(id, location).await
    }

    /// **Toggle today**: Flip the "for today" flag of an item.
    #[tool]
    async fn toggle_today(
        &self,
        /// ID of the item
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_today(id).await
    }

    /// **Toggle reminder**: Flip the "remember to bring back" flag of an item.
    #[tool]
    async fn toggle_reminder(
        &self,
        /// ID of the item
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_reminder(id).await
    }

    /// **Update item**: Edit fields of an item. Only provided fields change.
    #[tool]
    async fn update_item(
        &self,
        /// ID of the item to update
        id: String,
        /// New name (optional, must not be blank)
        name: Option<String>,
        /// New description (optional, empty string clears it)
        description: Option<String>,
        /// New category: socks/sweaters/tshirts/pants/shoes/other (optional)
        category: Option<String>,
        /// New photo (optional, empty string removes it)
        photo: Option<String>,
        /// New location: dads/moms/school/in_transit (optional)
        location: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_item(id, name, description, category, photo, location)
            .await
    }

    /// **Delete item**: Permanently remove an item. There is no undo.
    #[tool]
    async fn delete_item(
        &self,
        /// ID of the item to delete
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_item(id).await
    }

    /// **List items**: Browse the collection. Without a location filter the
    /// result is grouped by location.
    #[tool]
    async fn list_items(
        &self,
        /// Search: matches name or description, case-insensitive (optional)
        search: Option<String>,
        /// Location filter: all/dads/moms/school/in_transit (optional, default all)
        location: Option<String>,
        /// Mode: inventory (everything) or today (only items for today) (optional)
        mode: Option<String>,
    ) -> McpResult<String> {
        self.handle_list_items(search, location, mode).await
    }

    /// **Today**: What is packed for today, plus everything else that could be added.
    #[tool]
    async fn today(
        &self,
        /// Search: narrows the candidate list (optional)
        search: Option<String>,
    ) -> McpResult<String> {
        self.handle_today(search).await
    }

    /// **Reminders**: Items to bring back.
    #[tool]
    async fn reminders(&self) -> McpResult<String> {
        self.handle_reminders().await
    }

    /// **Stats**: Number of items at each location.
    #[tool]
    async fn stats(&self) -> McpResult<String> {
        self.handle_stats().await
    }
}
