//! When steps for service discovery BDD scenarios.

use super::world::{DiscoveryWorld, build_source};
use rstest_bdd_macros::when;
use servitor::adapters::memory::InMemoryCatalog;
use servitor::domain::{Source, SourceId, SourceName};
use std::sync::Arc;

#[when("both sources are registered")]
fn register_both_sources(world: &mut DiscoveryWorld) -> Result<(), eyre::Report> {
    for pending in world.pending_sources.drain(..) {
        let source = build_source(&pending.name, &pending.codecs)?;
        match world.registry.add(source) {
            Ok(id) => {
                world.registered_ids.insert(pending.name, id);
            }
            Err(err) => {
                return Err(eyre::eyre!("unexpected registration failure: {err}"));
            }
        }
    }
    Ok(())
}

#[when(r#"a second source reusing the identifier of "{name}" is registered"#)]
fn register_duplicate_source(world: &mut DiscoveryWorld, name: String) -> Result<(), eyre::Report> {
    let id = world
        .registered_ids
        .get(&name)
        .copied()
        .ok_or_else(|| eyre::eyre!("no registered source named '{name}' in scenario world"))?;
    let imposter = Source::with_id(
        id,
        SourceName::new("imposter").map_err(|err| eyre::eyre!("invalid imposter name: {err}"))?,
        Arc::new(InMemoryCatalog::new()),
    );
    world.last_add_result = Some(world.registry.add(imposter));
    Ok(())
}

#[when(r#"the source "{name}" is removed"#)]
fn remove_source_by_name(world: &mut DiscoveryWorld, name: String) -> Result<(), eyre::Report> {
    let id = world
        .registered_ids
        .get(&name)
        .copied()
        .ok_or_else(|| eyre::eyre!("no registered source named '{name}' in scenario world"))?;
    world.last_removal = Some(world.registry.remove(id));
    Ok(())
}

#[when("an unknown source identifier is removed")]
fn remove_unknown_source(world: &mut DiscoveryWorld) {
    world.last_removal = Some(world.registry.remove(SourceId::new()));
}
