use shared_types::{DemoFixture, SidebarFixture};

const ARCHIVED: &str = include_str!("../assets/fixtures/archived.json");
const MINIMAL: &str = include_str!("../assets/fixtures/minimal.json");
const INVALID: &str = include_str!("../assets/fixtures/invalid.json");

fn raw(fixture: DemoFixture) -> &'static str {
    match fixture {
        DemoFixture::Archived => ARCHIVED,
        DemoFixture::Minimal => MINIMAL,
        DemoFixture::Invalid => INVALID,
    }
}

/// Decode a bundled sample. A sample that fails to decode is logged and
/// replaced by an empty one, which the sidebar renders as placeholders.
pub fn load(fixture: DemoFixture) -> SidebarFixture {
    let data = decode(raw(fixture));
    tracing::info!(fixture = fixture.as_str(), "loaded sample complaint");
    data
}

/// Entries that fail validation are dropped one by one; the rest of the
/// sample is kept.
fn decode(json: &str) -> SidebarFixture {
    let mut data = match SidebarFixture::from_json(json) {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!(%err, "sample complaint rejected");
            return SidebarFixture::default();
        }
    };
    if let Err(err) = data.drop_invalid_entries() {
        tracing::warn!(%err, dropped = ?err.field_errors, "sample complaint had invalid entries");
    }
    data
}
