use crate::data::{
    cost_breakdown::{CostBreakdown, CostBreakdownTable, CostComponent},
    dataset::Dataset,
    delivery_performance::DeliveryPerformance,
    feedback::Feedback,
    order::{Order, Priority, SpecialHandling},
    route::Route,
    vehicle::{Vehicle, VehicleStatus},
};

pub fn create_order(
    order_id: &str,
    priority: Priority,
    origin: &str,
    special_handling: SpecialHandling,
    order_value_inr: f64,
) -> Order {
    Order {
        order_id: order_id.to_owned(),
        priority,
        product_category: String::from("General"),
        origin: origin.to_owned(),
        destination: String::from("Delhi"),
        special_handling,
        order_value_inr,
    }
}

pub fn create_vehicle(
    vehicle_id: &str,
    vehicle_type: &str,
    status: VehicleStatus,
    capacity_kg: f64,
    current_location: &str,
) -> Vehicle {
    Vehicle {
        vehicle_id: vehicle_id.to_owned(),
        vehicle_type: vehicle_type.to_owned(),
        status,
        capacity_kg,
        fuel_efficiency_km_per_l: 10.0,
        co2_emissions_kg_per_km: 0.3,
        age_years: 3.0,
        current_location: current_location.to_owned(),
    }
}

pub fn create_available_vehicle(
    vehicle_id: &str,
    vehicle_type: &str,
    capacity_kg: f64,
    current_location: &str,
) -> Vehicle {
    create_vehicle(
        vehicle_id,
        vehicle_type,
        VehicleStatus::Available,
        capacity_kg,
        current_location,
    )
}

pub fn create_delivery(
    carrier: &str,
    promised_delivery_days: f64,
    actual_delivery_days: f64,
    delivery_status: &str,
) -> DeliveryPerformance {
    DeliveryPerformance {
        order_id: String::from("ORD001"),
        carrier: carrier.to_owned(),
        promised_delivery_days,
        actual_delivery_days,
        delivery_status: delivery_status.to_owned(),
        quality_issue: None,
        customer_rating: Some(4.0),
        delivery_cost_inr: Some(500.0),
    }
}

fn with_efficiency(mut vehicle: Vehicle, fuel_efficiency: f64, co2_emissions: f64) -> Vehicle {
    vehicle.fuel_efficiency_km_per_l = fuel_efficiency;
    vehicle.co2_emissions_kg_per_km = co2_emissions;
    vehicle
}

fn route(order_id: &str, distance_km: f64) -> Route {
    Route {
        order_id: order_id.to_owned(),
        route: String::new(),
        distance_km,
        fuel_consumption_l: None,
        toll_charges_inr: None,
        traffic_delay_minutes: None,
        weather_impact: None,
    }
}

fn cost_row(order_id: &str, fuel: f64, labor: f64) -> CostBreakdown {
    CostBreakdown::new(
        order_id.to_owned(),
        vec![
            CostComponent {
                name: String::from("Fuel_Cost"),
                value: fuel,
            },
            CostComponent {
                name: String::from("Labor_Cost"),
                value: labor,
            },
        ],
    )
}

pub fn create_dataset() -> Dataset {
    let orders = vec![
        create_order("ORD001", Priority::Express, "Mumbai", SpecialHandling::None, 1500.0),
        create_order(
            "ORD002",
            Priority::Standard,
            "Delhi",
            SpecialHandling::TemperatureControlled,
            50_000.0,
        ),
        create_order("ORD003", Priority::Economy, "Chennai", SpecialHandling::Hazmat, 200_000.0),
        create_order("ORD004", Priority::Express, "Bangalore", SpecialHandling::Fragile, 8000.0),
    ];

    let vehicles = vec![
        with_efficiency(
            create_vehicle("VEH001", "Express_Bike", VehicleStatus::Available, 20.0, "Mumbai"),
            40.0,
            0.05,
        ),
        with_efficiency(
            create_vehicle("VEH002", "Small_Van", VehicleStatus::Available, 800.0, "Mumbai"),
            15.0,
            0.15,
        ),
        with_efficiency(
            create_vehicle("VEH003", "Medium_Truck", VehicleStatus::Available, 3000.0, "Delhi"),
            8.0,
            0.35,
        ),
        with_efficiency(
            create_vehicle(
                "VEH004",
                "Large_Truck",
                VehicleStatus::Maintenance,
                10_000.0,
                "Chennai",
            ),
            5.0,
            0.6,
        ),
        with_efficiency(
            create_vehicle("VEH005", "Refrigerated", VehicleStatus::Available, 2000.0, "Delhi"),
            7.0,
            0.4,
        ),
        with_efficiency(
            create_vehicle("VEH006", "Large_Truck", VehicleStatus::Available, 10_000.0, "Chennai"),
            5.0,
            0.6,
        ),
        with_efficiency(
            create_vehicle("VEH007", "Small_Van", VehicleStatus::InTransit, 800.0, "Mumbai"),
            15.0,
            0.15,
        ),
    ];

    let delivery_performance = vec![
        create_delivery("SpeedyLogistics", 3.0, 3.0, "On-Time"),
        create_delivery("SpeedyLogistics", 2.0, 4.0, "Slightly-Delayed"),
        create_delivery("QuickShip", 5.0, 4.0, "On-Time"),
        create_delivery("QuickShip", 3.0, 7.0, "Severely-Delayed"),
    ];

    let feedback = vec![
        Feedback {
            order_id: String::from("ORD001"),
            rating: 5,
            issue_category: String::from("None"),
            would_recommend: Some(String::from("Yes")),
            feedback_text: None,
        },
        Feedback {
            order_id: String::from("ORD002"),
            rating: 2,
            issue_category: String::from("Late Delivery"),
            would_recommend: Some(String::from("No")),
            feedback_text: None,
        },
    ];

    Dataset {
        orders,
        vehicles,
        routes: vec![
            route("ORD001", 1400.0),
            route("ORD002", 1450.0),
            route("ORD003", 1670.0),
            route("ORD004", 980.0),
        ],
        delivery_performance,
        cost_breakdown: CostBreakdownTable::new(
            vec![String::from("Fuel_Cost"), String::from("Labor_Cost")],
            vec![cost_row("ORD001", 100.0, 200.0), cost_row("ORD002", 300.0, 100.0)],
        ),
        feedback,
        inventory: vec![],
        warnings: vec![],
    }
}
