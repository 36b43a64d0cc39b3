//! Permutation-to-routes decoding.

use crate::models::{Route, Solution};

/// Decodes a customer permutation into a solution by contiguous chunking.
///
/// The permutation is split into `num_vehicles` contiguous chunks sized as
/// evenly as possible, with earlier vehicles absorbing the remainder; each
/// chunk is wrapped with depot boundaries. An empty permutation decodes to
/// `num_vehicles` depot-to-depot routes.
///
/// # Panics
///
/// Panics if `num_vehicles` is zero.
///
/// # Examples
///
/// ```
/// use fleetroute::ga::decode;
///
/// let solution = decode(&[3, 1, 4, 2, 5], 2);
/// assert_eq!(solution.routes()[0].nodes(), &[0, 3, 1, 4, 0]);
/// assert_eq!(solution.routes()[1].nodes(), &[0, 2, 5, 0]);
/// ```
pub fn decode(permutation: &[usize], num_vehicles: usize) -> Solution {
    assert!(num_vehicles >= 1, "at least one vehicle is required");

    let n = permutation.len();
    let per_vehicle = n / num_vehicles;
    let extra = n % num_vehicles;

    let mut routes = Vec::with_capacity(num_vehicles);
    let mut next = 0;
    for vehicle in 0..num_vehicles {
        let take = per_vehicle + usize::from(vehicle < extra);
        let mut nodes = Vec::with_capacity(take + 2);
        nodes.push(0);
        nodes.extend_from_slice(&permutation[next..next + take]);
        nodes.push(0);
        next += take;
        routes.push(Route::new(nodes));
    }
    Solution::from_routes(routes)
}
