use serde::Serialize;

/// An entry of the salon's service menu. The catalog is fixed at compile time.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub duration_min: u32,
    pub price_cents: u32,
    pub description: &'static str,
}

impl Service {
    pub fn display_price(&self) -> String {
        format_brl(self.price_cents)
    }
}

pub const CATALOG: [Service; 5] = [
    Service {
        id: "corte-finalizacao",
        name: "Corte & Finalização",
        duration_min: 60,
        price_cents: 18_000,
        description: "Corte personalizado com lavagem, escova e finalização.",
    },
    Service {
        id: "coloracao",
        name: "Coloração Completa",
        duration_min: 120,
        price_cents: 35_000,
        description: "Coloração global com produtos de alta performance.",
    },
    Service {
        id: "mechas-tratamento",
        name: "Mechas & Tratamento",
        duration_min: 180,
        price_cents: 58_000,
        description: "Mechas sob medida com tratamento reconstrutor.",
    },
    Service {
        id: "hidratacao-premium",
        name: "Hidratação Premium",
        duration_min: 90,
        price_cents: 22_000,
        description: "Ritual de hidratação profunda com ativos importados.",
    },
    Service {
        id: "penteado-evento",
        name: "Penteado para Evento",
        duration_min: 90,
        price_cents: 25_000,
        description: "Penteado exclusivo para casamentos e ocasiões especiais.",
    },
];

pub fn catalog() -> &'static [Service] {
    &CATALOG
}

pub fn find_service(id: &str) -> Option<&'static Service> {
    CATALOG.iter().find(|s| s.id == id)
}

/// Formats cents as Brazilian reais, e.g. `R$ 1.234,56`.
pub fn format_brl(cents: u32) -> String {
    let reais = (cents / 100).to_string();
    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (i, c) in reais.chars().enumerate() {
        if i > 0 && (reais.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("R$ {},{:02}", grouped, cents % 100)
}
