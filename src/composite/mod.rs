//! # Composite
//!
//! Treat individual objects and compositions of objects uniformly.
//!
//! - [`graphics`]: shapes and nested groups drawn the same way
//! - [`neural`]: one `connect` for neurons and layers
//! - [`creature`]: array-backed properties with aggregate queries
//! - [`values`]: summing single values and collections together

pub mod creature;
pub mod graphics;
pub mod neural;
pub mod values;

use crate::catalog::{Family, Showcase};
use crate::config::DemoConfig;
use crate::error::Result;

pub fn showcases() -> Vec<Showcase> {
    vec![
        Showcase::new(
            "composite-graphics",
            Family::Composite,
            "Nested groups of shapes",
            graphics_demo,
        ),
        Showcase::new(
            "composite-neural",
            Family::Composite,
            "Neurons and layers connected through one method",
            neural_demo,
        ),
        Showcase::new(
            "composite-creature",
            Family::Composite,
            "Array-backed creature abilities",
            creature_demo,
        ),
        Showcase::new(
            "composite-values",
            Family::Composite,
            "Summing single values and value collections",
            values_demo,
        ),
    ]
}

fn graphics_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use graphics::{Circle, Drawable, Group, IdGenerator, Triangle};

    let mut circle_ids = IdGenerator::new();
    let mut triangle_ids = IdGenerator::new();
    let circles = Group::new("CircleGroup")
        .with(Circle::new(&mut circle_ids))
        .with(Circle::new(&mut circle_ids));
    let root = Group::new("RootGroup")
        .with(circles)
        .with(Triangle::new(&mut triangle_ids));
    Ok(vec![root.draw()])
}

fn neural_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use neural::{Network, NeuronId};

    let mut network = Network::new();
    let inputs: Vec<NeuronId> = (0..3).map(|_| network.add_neuron()).collect();
    let hidden = network.add_layer(4);
    let outputs = network.add_layer(2);

    for input in &inputs {
        network.connect(input, &hidden);
    }
    network.connect(&hidden, &outputs);

    let mut lines = vec!["*** Inputs ***".to_string()];
    lines.extend(network.describe(inputs.as_slice()));
    lines.push("*** Layer ***".to_string());
    lines.extend(network.describe(&hidden));
    lines.push("*** Outputs ***".to_string());
    lines.extend(network.describe(&outputs));
    Ok(lines)
}

fn creature_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use creature::{Ability, Creature};

    let mut orc = Creature::new("orc");
    orc.set(Ability::Strength, 18);
    orc.set(Ability::Agility, 11);
    orc.set(Ability::Intelligence, 5);
    Ok(orc.to_string().lines().map(str::to_string).collect())
}

fn values_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use values::{ManyValues, SingleValue};

    let sv1 = SingleValue(10);
    let sv2 = SingleValue(15);
    let mv1: ManyValues = (1..=5).collect();
    let mv2: ManyValues = (6..=10).collect();
    Ok(vec![format!("sum is: {}", values::sum(&[&sv1, &mv1, &sv2, &mv2]))])
}
