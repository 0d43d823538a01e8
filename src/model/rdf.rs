/// Block-averaged radial distribution functions for one condition.
///
/// One entry per radial bin, in source order. The radius axis is carried
/// over verbatim from the first sampling block of the source file; the
/// three pair series are element-wise means over every block.
#[derive(Debug, Clone, PartialEq)]
pub struct RdfCurve {
    /// Bin center radii.
    pub r: Vec<f64>,
    /// g(r) for the O-O pair.
    pub g_oo: Vec<f64>,
    /// g(r) for the H-H pair.
    pub g_hh: Vec<f64>,
    /// g(r) for the O-H cross pair.
    pub g_oh: Vec<f64>,
}

impl RdfCurve {
    /// Number of radial bins.
    pub fn bins(&self) -> usize {
        self.r.len()
    }
}
