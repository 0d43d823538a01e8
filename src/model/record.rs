/// Scalar measurements harvested for one condition.
///
/// Fields stay `None` when the source file was absent or failed to parse.
/// A populated field is never overwritten; records only accumulate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurements {
    /// Mean mass density over the sampled production window.
    pub density: Option<f64>,
    /// Self-diffusion coefficient from the last reported snapshot.
    pub self_diffusion: Option<f64>,
    /// Viscosity from the last reported snapshot.
    pub viscosity: Option<f64>,
}

impl Measurements {
    pub fn is_complete(&self) -> bool {
        self.density.is_some() && self.self_diffusion.is_some() && self.viscosity.is_some()
    }

    /// Sets the density unless already populated.
    pub fn record_density(&mut self, value: f64) {
        self.density.get_or_insert(value);
    }

    /// Sets both transport properties unless already populated.
    pub fn record_transport(&mut self, self_diffusion: f64, viscosity: f64) {
        self.self_diffusion.get_or_insert(self_diffusion);
        self.viscosity.get_or_insert(viscosity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_recorded_value_wins() {
        let mut record = Measurements::default();
        record.record_density(1001.0);
        record.record_density(999.0);
        assert_eq!(record.density, Some(1001.0));
    }

    #[test]
    fn complete_requires_all_three_fields() {
        let mut record = Measurements::default();
        record.record_density(1001.0);
        assert!(!record.is_complete());

        record.record_transport(2e-9, 0.6);
        assert!(record.is_complete());
    }
}
