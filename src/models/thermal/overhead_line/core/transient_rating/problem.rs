//! Problem formulation for the transient current search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{electric_current::ampere, f64::ElectricCurrent};

use crate::models::thermal::overhead_line::core::{
    TimeStepping, TransientError, conditions::LineScalars, transient::rise,
};

/// Temperature rise reached by a trial current.
#[derive(Debug, Clone, Copy)]
pub(super) struct TransientPoint {
    pub(super) current: ElectricCurrent,
    /// °C
    pub(super) rise: f64,
}

/// Model adapter exposing the constant current as the sole input.
pub(super) struct TransientModel<'a> {
    line: &'a LineScalars,
    initial_temperature: f64,
    stepping: &'a TimeStepping,
}

impl<'a> TransientModel<'a> {
    pub(super) fn new(
        line: &'a LineScalars,
        initial_temperature: f64,
        stepping: &'a TimeStepping,
    ) -> Self {
        Self {
            line,
            initial_temperature,
            stepping,
        }
    }
}

impl Model for TransientModel<'_> {
    type Input = ElectricCurrent;
    type Output = TransientPoint;
    type Error = TransientError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let rise = rise(
            self.line,
            self.initial_temperature,
            input.get::<ampere>(),
            self.stepping,
        )?;
        Ok(TransientPoint {
            current: *input,
            rise,
        })
    }
}

/// Equation problem for reaching an allowed temperature rise.
///
/// Computes the residual as `rise - allowed_rise` in °C.
pub(super) struct TransientProblem {
    allowed_rise: f64,
}

impl TransientProblem {
    pub(super) fn new(allowed_rise: f64) -> Self {
        Self { allowed_rise }
    }

    pub(super) fn residual(&self, point: &TransientPoint) -> f64 {
        point.rise - self.allowed_rise
    }
}

impl EquationProblem<1> for TransientProblem {
    type Input = ElectricCurrent;
    type Output = TransientPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ElectricCurrent::new::<ampere>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}
