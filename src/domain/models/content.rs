use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize, Clone)]
pub struct Review {
    pub name: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

#[derive(Debug, Serialize, Clone)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Serialize, Clone)]
pub struct SalonInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub slogan: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub instagram_url: &'static str,
    pub facebook_url: &'static str,
    pub opening_hours: [OpeningHours; 3],
}

pub const SALON: SalonInfo = SalonInfo {
    name: "Atelier Lumière",
    tagline: "Sua melhor versão, revelada por especialistas",
    slogan: "Onde beleza e sofisticação se encontram para revelar sua melhor versão.",
    address: "Av. Paulista, 1000 - São Paulo, SP",
    phone: "(11) 3000-0000",
    email: "contato@atelierlumiere.com.br",
    instagram_url: "https://instagram.com",
    facebook_url: "https://facebook.com",
    opening_hours: [
        OpeningHours { days: "Segunda a Sexta", hours: "9h às 20h" },
        OpeningHours { days: "Sábado", hours: "9h às 18h" },
        OpeningHours { days: "Domingo", hours: "Fechado" },
    ],
};

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "sparkles",
        title: "Produtos Premium",
        description: "Trabalhamos exclusivamente com marcas de luxo reconhecidas mundialmente",
    },
    Feature {
        icon: "award",
        title: "Expertise Reconhecida",
        description: "Nossa equipe conta com profissionais premiados e certificados internacionalmente",
    },
    Feature {
        icon: "heart",
        title: "Experiência Única",
        description: "Cada visita é uma jornada de transformação e autocuidado personalizada",
    },
];

pub const REVIEWS: [Review; 6] = [
    Review {
        name: "Mariana Santos",
        text: "Simplesmente perfeito! A atenção aos detalhes e o resultado final superaram todas as minhas expectativas.",
        rating: 5,
    },
    Review {
        name: "Juliana Costa",
        text: "Profissionais incríveis, ambiente sofisticado e um resultado maravilhoso. Virei cliente fiel!",
        rating: 5,
    },
    Review {
        name: "Rafaela Lima",
        text: "A melhor experiência em salão que já tive. Saí de lá me sentindo renovada e radiante.",
        rating: 5,
    },
    Review {
        name: "Amanda Silva",
        text: "Recomendo de olhos fechados! Equipe super atenciosa e resultado impecável.",
        rating: 5,
    },
    Review {
        name: "Camila Ferreira",
        text: "Transformação total! Adorei cada minuto no salão e o cuidado que tiveram comigo.",
        rating: 5,
    },
    Review {
        name: "Beatriz Alves",
        text: "Luxo, conforto e profissionalismo em um só lugar. Não troco por nada!",
        rating: 5,
    },
];

/// The carousel scrolls endlessly by rendering the list twice.
pub fn carousel_reviews() -> Vec<Review> {
    REVIEWS.iter().chain(REVIEWS.iter()).cloned().collect()
}
