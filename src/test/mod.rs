mod calculator;

pub use calculator::*;

use crate::metadata::{
    config::ReflectionConfig,
    model::Model,
    package::{Package, PackageBuilder},
};

// Helper function to load a package with the default configuration
pub fn load(builder: PackageBuilder) -> Model {
    let package: Package = builder.build().unwrap();
    Model::load(package, ReflectionConfig::default()).unwrap()
}
