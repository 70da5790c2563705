//! Reference grids with known minimum heat loss.

/// 13x13 city: 102 for [`ORDINARY`](crate::ORDINARY), 94 for
/// [`LONG_HAUL`](crate::LONG_HAUL), corner to corner.
pub const SAMPLE_CITY: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

/// The cheap top corridor is one cell longer than a long-haul run, so that
/// vehicle has to leave it early and pay for expensive cells: 71 for
/// [`LONG_HAUL`](crate::LONG_HAUL), 59 for [`ORDINARY`](crate::ORDINARY).
pub const SAMPLE_CORRIDOR: &str = "\
111111111111
999999999991
999999999991
999999999991
999999999991
";
