use metromap::{Distance, StationId, TransitNetwork};

/// The sample network from the crate README: four Delhi Metro stations with
/// four bidirectional routes.
pub struct DelhiMetro {
    pub network: TransitNetwork,
    pub kashmere_gate: StationId,
    pub rajiv_chauk: StationId,
    pub nsp: StationId,
    pub botanical_garden: StationId,
}

pub fn delhi_metro() -> DelhiMetro {
    let mut network = TransitNetwork::new();

    let kashmere_gate = network.register_station("Kashmere Gate");
    let rajiv_chauk = network.register_station("Rajiv Chauk");
    let nsp = network.register_station("NSP");
    let botanical_garden = network.register_station("Botanical Garden");

    network
        .add_route(kashmere_gate, rajiv_chauk, Distance::from_units(15), true)
        .unwrap();
    network
        .add_route(rajiv_chauk, nsp, Distance::from_units(30), true)
        .unwrap();
    network
        .add_route(kashmere_gate, nsp, Distance::from_units(200), true)
        .unwrap();
    network
        .add_route(kashmere_gate, botanical_garden, Distance::from_units(30), true)
        .unwrap();

    DelhiMetro {
        network,
        kashmere_gate,
        rajiv_chauk,
        nsp,
        botanical_garden,
    }
}
