//! Neurons and layers of neurons wired up through one `connect`.
//!
//! Neurons live in a [`Network`] arena and refer to each other by
//! [`NeuronId`]. Both a single id and a [`NeuronLayer`] implement
//! [`Neurons`], so connecting neuron to neuron, neuron to layer, layer to
//! neuron and layer to layer is the same call.

use itertools::Itertools;
use std::fmt;
use std::slice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeuronId(usize);

impl NeuronId {
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neuron {
    pub id: NeuronId,
    pub inputs: Vec<NeuronId>,
    pub outputs: Vec<NeuronId>,
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Neuron{}{{in[{}],out[{}]}}",
            self.id.0,
            self.inputs.iter().join(","),
            self.outputs.iter().join(",")
        )
    }
}

pub trait Neurons {
    fn neuron_ids(&self) -> &[NeuronId];
}

impl Neurons for NeuronId {
    fn neuron_ids(&self) -> &[NeuronId] {
        slice::from_ref(self)
    }
}

impl Neurons for [NeuronId] {
    fn neuron_ids(&self) -> &[NeuronId] {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeuronLayer {
    ids: Vec<NeuronId>,
}

impl NeuronLayer {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NeuronId> {
        self.ids.get(index).copied()
    }
}

impl Neurons for NeuronLayer {
    fn neuron_ids(&self) -> &[NeuronId] {
        &self.ids
    }
}

#[derive(Debug, Default)]
pub struct Network {
    neurons: Vec<Neuron>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids are 1-based and follow creation order.
    pub fn add_neuron(&mut self) -> NeuronId {
        let id = NeuronId(self.neurons.len() + 1);
        self.neurons.push(Neuron {
            id,
            inputs: Vec::new(),
            outputs: Vec::new(),
        });
        id
    }

    pub fn add_layer(&mut self, count: usize) -> NeuronLayer {
        NeuronLayer {
            ids: (0..count).map(|_| self.add_neuron()).collect(),
        }
    }

    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        id.0.checked_sub(1).and_then(|index| self.neurons.get(index))
    }

    /// Every neuron of `from` gets an output to every neuron of `to`, and
    /// each of those gets the matching input.
    pub fn connect<A, B>(&mut self, from: &A, to: &B)
    where
        A: Neurons + ?Sized,
        B: Neurons + ?Sized,
    {
        for &source in from.neuron_ids() {
            for &target in to.neuron_ids() {
                if let Some(neuron) = self.neuron_mut(source) {
                    neuron.outputs.push(target);
                }
                if let Some(neuron) = self.neuron_mut(target) {
                    neuron.inputs.push(source);
                }
            }
        }
    }

    pub fn describe<N: Neurons + ?Sized>(&self, group: &N) -> Vec<String> {
        group
            .neuron_ids()
            .iter()
            .filter_map(|&id| self.neuron(id))
            .map(Neuron::to_string)
            .collect()
    }

    fn neuron_mut(&mut self, id: NeuronId) -> Option<&mut Neuron> {
        id.0.checked_sub(1).and_then(|index| self.neurons.get_mut(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neuron_to_neuron() {
        let mut network = Network::new();
        let a = network.add_neuron();
        let b = network.add_neuron();
        network.connect(&a, &b);

        assert_eq!(network.neuron(a).unwrap().outputs, vec![b]);
        assert_eq!(network.neuron(b).unwrap().inputs, vec![a]);
        assert!(network.neuron(a).unwrap().inputs.is_empty());
    }

    #[test]
    fn test_neuron_to_layer_display() {
        let mut network = Network::new();
        let first = network.add_neuron();
        let _unused = network.add_neuron();
        let _also_unused = network.add_neuron();
        let layer = network.add_layer(2);
        network.connect(&first, &layer);

        assert_eq!(network.neuron(first).unwrap().to_string(), "Neuron1{in[],out[N4,N5]}");
        assert_eq!(network.describe(&layer), vec!["Neuron4{in[N1],out[]}", "Neuron5{in[N1],out[]}"]);
    }

    #[test]
    fn test_layer_to_layer() {
        let mut network = Network::new();
        let left = network.add_layer(2);
        let right = network.add_layer(3);
        network.connect(&left, &right);

        for id in left.neuron_ids() {
            assert_eq!(network.neuron(*id).unwrap().outputs.len(), 3);
        }
        for id in right.neuron_ids() {
            assert_eq!(network.neuron(*id).unwrap().inputs.len(), 2);
        }
    }

    #[test]
    fn test_layer_to_neuron() {
        let mut network = Network::new();
        let layer = network.add_layer(2);
        let sink = network.add_neuron();
        network.connect(&layer, &sink);
        assert_eq!(network.neuron(sink).unwrap().to_string(), "Neuron3{in[N1,N2],out[]}");
    }

    #[test]
    fn test_unknown_neuron() {
        let network = Network::new();
        assert!(network.neuron(NeuronId(0)).is_none());
        assert!(network.neuron(NeuronId(1)).is_none());
    }
}
