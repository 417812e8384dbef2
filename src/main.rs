use route_optimizer::geocoding::SimulatedGeocoder;
use route_optimizer::optimizer::RouteOptimizer;
use route_optimizer::utils::log::init_logging;

fn main() {
    init_logging();

    let optimizer = RouteOptimizer::new(SimulatedGeocoder::new());

    // plan a trip over well-known cities
    let origin = "New York";
    let destinations = ["Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia"];

    println!(
        "Planning a trip from {} through {} destinations",
        origin,
        destinations.len()
    );

    let start_time = std::time::Instant::now();
    let route = match optimizer.optimize(origin, &destinations) {
        Ok(route) => route,
        Err(e) => {
            eprintln!("Route optimization failed: {}", e);
            return;
        }
    };
    let elapsed = start_time.elapsed();

    println!("Optimized visiting order (found in {:.2?}):", elapsed);
    println!("------------------------------------------");
    for (i, stop) in route.stops.iter().enumerate() {
        let marker = if i == 0 { " (start)" } else { "" };
        println!(
            "  {}. {} at ({:.4}, {:.4}){}",
            i + 1,
            stop.name,
            stop.coordinate.latitude,
            stop.coordinate.longitude,
            marker
        );
        if i < route.leg_distances_km.len() {
            println!("       next leg: {:.3} km", route.leg_distances_km[i]);
        }
    }
    println!("Total distance: {:.3} km", route.total_distance_km);
    println!(
        "Map center: ({:.4}, {:.4})",
        route.map_center.latitude, route.map_center.longitude
    );

    // unknown names take the synthetic path, like calls to a real service
    println!("\nPlanning a second trip with unknown place names");
    match optimizer.optimize("Dallas", &["San Antonio", "Marfa", "El Paso"]) {
        Ok(route) => {
            println!(
                "Second trip covers {} stops over {:.3} km:",
                route.stop_count(),
                route.total_distance_km
            );
            for leg in route.legs() {
                println!("  {}", leg);
            }
        }
        Err(e) => eprintln!("Route optimization failed: {}", e),
    }
}
