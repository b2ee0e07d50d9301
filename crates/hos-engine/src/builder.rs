//! Fluent builder for constructing a [`TripSimulator`].

use hos_core::HosRules;
use hos_logbook::{LogIdentity, LogbookOptions, MileageSource};
use hos_route::RouteProvider;

use crate::{EngineResult, TripSimulator};

/// Fluent builder for [`TripSimulator<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                        |
/// |------------------|--------------------------------|
/// | `.rules(r)`      | `HosRules::default()` (70/8)   |
/// | `.identity(i)`   | `LogIdentity::default()`       |
/// | `.mileage(m)`    | `MileageSource::Recorded`      |
///
/// # Example
///
/// ```rust,ignore
/// let sim = TripSimulatorBuilder::new(StraightLineRouter::default())
///     .rules(rules)
///     .identity(LogIdentity { driver_name: "A. Driver".into(), ..Default::default() })
///     .build()?;
/// ```
pub struct TripSimulatorBuilder<R: RouteProvider> {
    router:  R,
    rules:   HosRules,
    logbook: LogbookOptions,
}

impl<R: RouteProvider> TripSimulatorBuilder<R> {
    pub fn new(router: R) -> Self {
        Self {
            router,
            rules:   HosRules::default(),
            logbook: LogbookOptions::default(),
        }
    }

    pub fn rules(mut self, rules: HosRules) -> Self {
        self.rules = rules;
        self
    }

    /// Driver, carrier and vehicle printed on every log sheet.
    pub fn identity(mut self, identity: LogIdentity) -> Self {
        self.logbook.identity = identity;
        self
    }

    pub fn mileage(mut self, mileage: MileageSource) -> Self {
        self.logbook.mileage = mileage;
        self
    }

    pub fn logbook(mut self, logbook: LogbookOptions) -> Self {
        self.logbook = logbook;
        self
    }

    /// Validate the rules and produce the simulator.
    ///
    /// # Errors
    ///
    /// [`EngineError::Core`](crate::EngineError::Core) when a rule value is
    /// non-positive or non-finite.
    pub fn build(self) -> EngineResult<TripSimulator<R>> {
        self.rules.validate()?;
        Ok(TripSimulator {
            rules:   self.rules,
            router:  self.router,
            logbook: self.logbook,
        })
    }
}
