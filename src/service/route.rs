//! Greedy nearest-neighbor ordering of delivery stops.
//!
//! The driver report feeds each driver's stops through
//! [`sequence_route`] so deliveries are listed in a drivable order
//! instead of submission order. Distances are unprojected straight
//! lines, which is accurate enough at city scale; this is a heuristic
//! walk, not an optimal tour.

/// Qatar spans roughly 24-26 degrees north, so a leading value with a
/// magnitude past this limit cannot be a latitude; the pair is assumed
/// to be longitude-first and is swapped. Stored coordinates depend on
/// this exact behavior — do not tighten it.
const LATITUDE_PLAUSIBILITY_LIMIT: f64 = 40.0;

/// Parse a raw `"lat,lng"` order coordinate into `(latitude, longitude)`.
///
/// Returns `None` for anything that does not start with two parseable
/// floating point fields.
pub fn parse_coordinate(raw: &str) -> Option<(f64, f64)> {
    let mut parts = raw.split(',');
    let first: f64 = parts.next()?.trim().parse().ok()?;
    let second: f64 = parts.next()?.trim().parse().ok()?;

    if first.abs() > LATITUDE_PLAUSIBILITY_LIMIT {
        Some((second, first))
    } else {
        Some((first, second))
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dlat = a.0 - b.0;
    let dlng = a.1 - b.1;
    (dlat * dlat + dlng * dlng).sqrt()
}

/// Reorder stops into an approximate delivery route.
///
/// Stops with a parseable coordinate are walked greedily: start from the
/// northernmost stop (westernmost on ties), then repeatedly visit the
/// nearest remaining stop. Stops without a coordinate keep their
/// original relative order at the end of the route. With no coordinates
/// at all the input order is returned unchanged.
pub fn sequence_route<T, F>(stops: Vec<T>, coordinate_of: F) -> Vec<T>
where
    F: Fn(&T) -> Option<String>,
{
    let mut with_coords: Vec<(T, (f64, f64))> = Vec::new();
    let mut without_coords: Vec<T> = Vec::new();

    for stop in stops {
        match coordinate_of(&stop).as_deref().and_then(parse_coordinate) {
            Some(coordinate) => with_coords.push((stop, coordinate)),
            None => without_coords.push(stop),
        }
    }

    if with_coords.is_empty() {
        return without_coords;
    }

    with_coords.sort_by(|(_, a), (_, b)| b.0.total_cmp(&a.0).then_with(|| a.1.total_cmp(&b.1)));

    let mut route = Vec::with_capacity(with_coords.len());
    route.push(with_coords.remove(0));

    while !with_coords.is_empty() {
        let last = route[route.len() - 1].1;
        let nearest = with_coords
            .iter()
            .enumerate()
            .min_by(|(_, (_, a)), (_, (_, b))| distance(last, *a).total_cmp(&distance(last, *b)))
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        route.push(with_coords.remove(nearest));
    }

    route
        .into_iter()
        .map(|(stop, _)| stop)
        .chain(without_coords)
        .collect()
}
