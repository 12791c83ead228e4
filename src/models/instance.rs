//! Problem instance for a homogeneous fleet.

use serde::Deserialize;

use super::{Customer, TimeWindow};
use crate::error::SolverError;

/// A VRPTW instance: vehicle count, one shared capacity, and the ordered
/// customer list with the depot at index 0.
///
/// Immutable for the duration of a solve. Deserializes directly from the
/// input-boundary JSON shape:
///
/// ```json
/// {
///   "numVehicles": 2,
///   "capacity": 100,
///   "customers": [
///     {"id": 0, "x": 0.0, "y": 0.0, "demand": 0,
///      "readyTime": 0.0, "dueTime": 1000.0, "serviceTime": 0.0}
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    num_vehicles: usize,
    capacity: i32,
    customers: Vec<Customer>,
}

impl Instance {
    /// Creates a validated instance.
    ///
    /// Requirements: at least one vehicle, non-negative capacity, a non-empty
    /// customer list whose ids are contiguous from 0, depot (index 0) with
    /// zero demand, and non-negative demands throughout.
    pub fn new(
        num_vehicles: usize,
        capacity: i32,
        customers: Vec<Customer>,
    ) -> Result<Self, SolverError> {
        if num_vehicles == 0 {
            return Err(SolverError::InvalidInstance(
                "numVehicles must be at least 1".into(),
            ));
        }
        if capacity < 0 {
            return Err(SolverError::InvalidInstance(
                "capacity must be non-negative".into(),
            ));
        }
        if customers.is_empty() {
            return Err(SolverError::InvalidInstance(
                "customer list is empty (the depot is required)".into(),
            ));
        }
        for (index, customer) in customers.iter().enumerate() {
            if customer.id() != index {
                return Err(SolverError::InvalidInstance(format!(
                    "customer ids must be contiguous from 0: found id {} at index {}",
                    customer.id(),
                    index
                )));
            }
            if customer.demand() < 0 {
                return Err(SolverError::InvalidInstance(format!(
                    "customer {} has negative demand {}",
                    customer.id(),
                    customer.demand()
                )));
            }
        }
        if customers[0].demand() != 0 {
            return Err(SolverError::InvalidInstance(
                "depot (id 0) must have zero demand".into(),
            ));
        }
        Ok(Self {
            num_vehicles,
            capacity,
            customers,
        })
    }

    /// Number of vehicles in the fleet.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Capacity shared by every vehicle.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// All locations, depot first.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Number of customers excluding the depot.
    pub fn num_customers(&self) -> usize {
        self.customers.len() - 1
    }

    /// The customer with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn customer(&self, id: usize) -> &Customer {
        &self.customers[id]
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCustomer {
    id: usize,
    x: f64,
    y: f64,
    demand: i32,
    ready_time: f64,
    due_time: f64,
    service_time: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInstance {
    num_vehicles: usize,
    capacity: i32,
    customers: Vec<RawCustomer>,
}

impl TryFrom<RawInstance> for Instance {
    type Error = SolverError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        let mut customers = Vec::with_capacity(raw.customers.len());
        for c in raw.customers {
            let window = TimeWindow::new(c.ready_time, c.due_time).ok_or_else(|| {
                SolverError::InvalidInstance(format!(
                    "customer {} has an invalid time window [{}, {}]",
                    c.id, c.ready_time, c.due_time
                ))
            })?;
            customers.push(Customer::new(
                c.id,
                c.x,
                c.y,
                c.demand,
                c.service_time,
                window,
            ));
        }
        Instance::new(raw.num_vehicles, raw.capacity, customers)
    }
}
