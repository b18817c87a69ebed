//! Names command - list recognized enumeration names

use anyhow::Result;
use rawvid_core::{ChannelOrder, NamedEnum, PackingOrder, PlaneOrder, Subsampling};
use tracing::trace;

/// `index: name` rows under a title.
pub fn table<T: NamedEnum>(title: &str) -> String {
    let mut out = format!("{title} ({}):", T::count());
    for value in T::values() {
        out.push_str(&format!("\n  {}: {}", value.index(), value.name()));
    }
    out
}

pub fn run() -> Result<()> {
    trace!("names::run");

    let tables = [
        table::<Subsampling>("Subsampling"),
        table::<PlaneOrder>("Plane order"),
        table::<PackingOrder>("Packing order"),
        table::<ChannelOrder>("Channel order"),
    ];
    println!("{}", tables.join("\n\n"));
    Ok(())
}
