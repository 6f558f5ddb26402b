//! Then steps for service discovery BDD scenarios.

use super::world::{DiscoveryWorld, parse_labels};
use rstest_bdd_macros::then;
use servitor::services::ServiceRegistryError;

#[then("listing sources returns {count:usize} entries")]
fn listing_returns_count(world: &mut DiscoveryWorld, count: usize) -> Result<(), eyre::Report> {
    let listed = world.registry.sources().count();
    if listed != count {
        return Err(eyre::eyre!("expected {count} sources, found {listed}"));
    }
    Ok(())
}

#[then(r#"discovery yields codecs "{expected}" in order"#)]
fn discovery_yields_in_order(
    world: &mut DiscoveryWorld,
    expected: String,
) -> Result<(), eyre::Report> {
    let discovered = world
        .registry
        .discover_all()
        .map(|item| item.map(|codec| codec.name()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| eyre::eyre!("discovery failed: {err}"))?;
    let expected_labels = parse_labels(&expected);
    if discovered != expected_labels {
        return Err(eyre::eyre!(
            "expected codecs {expected_labels:?} in order, found {discovered:?}"
        ));
    }
    Ok(())
}

#[then("registration fails with a duplicate source error")]
fn registration_fails_with_duplicate(world: &DiscoveryWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    if !matches!(result, Err(ServiceRegistryError::DuplicateSource(_))) {
        return Err(eyre::eyre!("expected duplicate source error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the removed source is named "{name}""#)]
fn removed_source_is_named(world: &DiscoveryWorld, name: String) -> Result<(), eyre::Report> {
    let removal = world
        .last_removal
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing removal result in scenario world"))?;
    let source = removal
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected a source to have been removed"))?;
    if source.name().as_str() != name {
        return Err(eyre::eyre!(
            "expected removed source '{name}', found '{}'",
            source.name()
        ));
    }
    Ok(())
}

#[then("no source is removed")]
fn no_source_is_removed(world: &DiscoveryWorld) -> Result<(), eyre::Report> {
    let removal = world
        .last_removal
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing removal result in scenario world"))?;
    if removal.is_some() {
        return Err(eyre::eyre!("expected no source to have been removed"));
    }
    Ok(())
}
