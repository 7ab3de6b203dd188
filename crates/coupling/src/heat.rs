// external crates
use fetools_expansion::MIN_MEASURE;

/// Volumetric heat source from a kappa-fission density
///
/// Converts a kappa-fission tally (eV per source particle) into a heat source
/// in power per unit volume for a pin of total `power`.
///
/// ```text
/// q''' = kappa · power / (kappa_integral · volume)
/// ```
///
/// The integral of the kappa-fission distribution over the pin and the pin
/// volume are supplied by the host. If either is below [MIN_MEASURE], negative,
/// or not a number, there is nothing meaningful to normalise by and the source
/// is zero.
///
/// ```rust
/// # use fetools_coupling::heat_source;
/// assert_eq!(heat_source(2.0, 100.0, 4.0, 5.0), 10.0);
///
/// // No tallied fission, no heat
/// assert_eq!(heat_source(2.0, 100.0, 0.0, 5.0), 0.0);
/// assert_eq!(heat_source(2.0, 100.0, -1.0, 5.0), 0.0);
/// assert_eq!(heat_source(2.0, 100.0, 4.0, -5.0), 0.0);
/// ```
pub fn heat_source(kappa_fission: f64, power: f64, kappa_integral: f64, volume: f64) -> f64 {
    if !(kappa_integral >= MIN_MEASURE && volume >= MIN_MEASURE) {
        return 0.0;
    }
    kappa_fission * power / (kappa_integral * volume)
}
