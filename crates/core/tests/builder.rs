// Unit tests for PipelineBuilder
mod common;

use partner_core::components::{ADDRESSES, PARTNERS, PHONES, register_components};
use partner_core::error::PartnerError;
use partner_core::model::IndividualPartner;
use partner_core::pipeline::{ComponentRegistry, PipelineBuilder};
use std::sync::Arc;

fn registry() -> Arc<ComponentRegistry<IndividualPartner>> {
    let mut registry = ComponentRegistry::new();
    register_components(&mut registry, &common::sources());
    Arc::new(registry)
}

#[test]
fn test_builder_add_component_success() {
    let result = PipelineBuilder::new("test", registry()).add_component(PARTNERS);

    assert!(result.is_ok());
}

#[test]
fn test_builder_add_nonexistent_component() {
    let result = PipelineBuilder::new("test", registry()).add_component("nonexistent");

    assert!(matches!(result, Err(PartnerError::InvalidConfig(_))));
}

#[test]
fn test_builder_rejects_unknown_name_among_many() {
    let result =
        PipelineBuilder::new("test", registry()).add_components([PARTNERS, "emails", PHONES]);

    match result {
        Err(PartnerError::InvalidConfig(msg)) => assert!(msg.contains("emails")),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("unknown component accepted"),
    }
}

#[test]
fn test_builder_keeps_caller_order() {
    let pipeline = PipelineBuilder::new("test", registry())
        .add_components([PARTNERS, PHONES, ADDRESSES])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(pipeline.name(), "test");
    assert_eq!(
        pipeline.component_names(),
        vec!["Partners", "PartnersWithPhones", "PartnersWithAddresses"]
    );
}

#[test]
fn test_builder_without_components() {
    let pipeline = PipelineBuilder::new("empty", registry()).build().unwrap();

    assert!(pipeline.is_empty());
}

#[tokio::test]
async fn test_builder_pipeline_executes() {
    let pipeline = PipelineBuilder::new("full", registry())
        .add_component(PARTNERS)
        .and_then(|b| b.add_component(ADDRESSES))
        .and_then(|b| b.add_component(PHONES))
        .and_then(|b| b.build())
        .unwrap();

    let partners = pipeline.build().await.unwrap();

    assert_eq!(partners.len(), 3);
}
