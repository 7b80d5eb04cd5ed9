//! Validation helper functions for MCP tool parameters
//!
//! Each parser turns a loosely-typed string argument into the matching
//! domain type, or an invalid-params error naming the valid options.

use crate::inventory::{Category, Location, LocationFilter, ViewMode};
use mcp_attr::Result as McpResult;
use std::str::FromStr;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

fn parse<T>(value: &str) -> McpResult<T>
where
    T: FromStr<Err = String>,
{
    value.parse::<T>().map_err(invalid_params)
}

/// Treat `None` and blank strings alike
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn parse_location(value: &str) -> McpResult<Location> {
    parse(value)
}

/// Missing or blank means the default location
pub fn parse_optional_location(value: Option<&str>) -> McpResult<Option<Location>> {
    present(value).map(parse).transpose()
}

/// Missing or blank means all locations
pub fn parse_location_filter(value: Option<&str>) -> McpResult<LocationFilter> {
    present(value).map_or(Ok(LocationFilter::All), parse)
}

pub fn parse_category(value: Option<&str>) -> McpResult<Option<Category>> {
    present(value).map(parse).transpose()
}

/// Missing or blank means inventory mode
pub fn parse_mode(value: Option<&str>) -> McpResult<ViewMode> {
    present(value).map_or(Ok(ViewMode::Inventory), parse)
}

/// Trim surrounding whitespace from an item id
///
/// Ids are opaque; nothing else about them is changed.
pub fn normalize_item_id(item_id: &str) -> String {
    item_id.trim().to_string()
}
