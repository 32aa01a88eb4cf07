/// Everything one forward pass computed, handed to `Network::backpropagate`.
///
/// `activations[0]` is the input itself; `activations[i]` for `i >= 1` is the
/// output of layer `i`, which the backward pass feeds to
/// `ActivationFunction::derivative`. `sums[i - 1]` holds the pre-activation
/// sums of layer `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardCache {
    pub(crate) activations: Vec<Vec<f64>>,
    pub(crate) sums: Vec<Vec<f64>>,
}

impl ForwardCache {
    /// Output of the last layer.
    pub fn output(&self) -> &[f64] {
        self.activations.last().map_or(&[], |a| a.as_slice())
    }

    pub fn into_output(mut self) -> Vec<f64> {
        self.activations.pop().unwrap_or_default()
    }

    /// Activations of `layer` (0 = input).
    pub fn activations(&self, layer: usize) -> &[f64] {
        &self.activations[layer]
    }

    /// Pre-activation sums of `layer`; layer 0 has none.
    pub fn sums(&self, layer: usize) -> Option<&[f64]> {
        layer.checked_sub(1).and_then(|i| self.sums.get(i)).map(|s| s.as_slice())
    }

    pub fn layer_count(&self) -> usize {
        self.activations.len()
    }
}
