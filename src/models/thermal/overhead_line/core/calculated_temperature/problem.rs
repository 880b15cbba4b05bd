//! Problem formulation for the steady-state temperature search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use crate::models::thermal::overhead_line::core::{
    NonFiniteBalance,
    conditions::{BalanceTerms, LineScalars},
};

/// Heat balance evaluated at a trial conductor temperature.
#[derive(Debug, Clone, Copy)]
pub(super) struct SteadyStatePoint {
    pub(super) conductor_temperature: ThermodynamicTemperature,
    pub(super) terms: BalanceTerms,
}

/// Model adapter exposing the conductor temperature as the sole input.
pub(super) struct SteadyStateModel<'a> {
    line: &'a LineScalars,
}

impl<'a> SteadyStateModel<'a> {
    pub(super) fn new(line: &'a LineScalars) -> Self {
        Self { line }
    }
}

impl Model for SteadyStateModel<'_> {
    type Input = ThermodynamicTemperature;
    type Output = SteadyStatePoint;
    type Error = NonFiniteBalance;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let terms = self.line.finite_balance_at(input.get::<degree_celsius>())?;

        Ok(SteadyStatePoint {
            conductor_temperature: *input,
            terms,
        })
    }
}

/// Equation problem for matching a target current.
///
/// The residual is the net cooling left over after Joule heating,
/// `q_c + q_r - q_s - I²R` in W/ft. It is negative below the solution and
/// positive above it.
pub(super) struct SteadyStateProblem {
    current: f64,
}

impl SteadyStateProblem {
    /// Creates a problem for a target current in amperes.
    pub(super) fn new(current: f64) -> Self {
        Self { current }
    }

    /// Residual for already-evaluated balance terms.
    pub(super) fn residual(&self, terms: &BalanceTerms) -> f64 {
        -terms.net_heating(self.current)
    }
}

impl EquationProblem<1> for SteadyStateProblem {
    type Input = ThermodynamicTemperature;
    type Output = SteadyStatePoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<degree_celsius>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(&output.terms)])
    }
}
