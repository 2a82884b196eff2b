use glam::Vec3;

/// Hit testing implemented by the integrator, e.g. backed by a BVH over
/// scene geometry or a simple analytic test.
///
/// The returned value is the parametric distance `t` along `direction`
/// from `origin`; `None` means no intersection. Implementations must be
/// side-effect-free with respect to controller state - the controller
/// invokes them synchronously from inside pick operations.
pub trait RaycastProvider {
    /// Cast a ray and return the parametric hit distance, if any.
    ///
    /// `direction` is unit length.
    fn cast(&self, origin: Vec3, direction: Vec3) -> Option<f32>;
}

/// Plain closures work as providers, which keeps simple integrations
/// free of wrapper types.
impl<F> RaycastProvider for F
where
    F: Fn(Vec3, Vec3) -> Option<f32>,
{
    fn cast(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        self(origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_acts_as_provider() {
        let provider = |origin: Vec3, _dir: Vec3| Some(origin.z);
        let t = provider.cast(Vec3::new(0.0, 0.0, 7.0), Vec3::NEG_Z);
        assert_eq!(t, Some(7.0));
    }

    #[test]
    fn boxed_provider_is_object_safe() {
        let provider: Box<dyn RaycastProvider> =
            Box::new(|_: Vec3, _: Vec3| None);
        assert!(provider.cast(Vec3::ZERO, Vec3::Z).is_none());
    }
}
