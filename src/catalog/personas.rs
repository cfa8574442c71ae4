//! Buyer-persona catalog
//!
//! Segments and weights come straight from ad-account performance data:
//! women 45-64 carry the store (ROAS 3.3-3.8), so they dominate the pool.

use once_cell::sync::Lazy;
use rand::Rng;

use crate::types::BuyerPersona;

fn persona(
    id: &str,
    name: &str,
    emoji: &str,
    weight: u32,
    desc: &str,
    pain: &str,
    motivator: &str,
    tone: &str,
) -> BuyerPersona {
    BuyerPersona {
        id: id.into(),
        name: name.into(),
        emoji: emoji.into(),
        weight,
        desc: desc.into(),
        pain: pain.into(),
        motivator: motivator.into(),
        tone: tone.into(),
    }
}

static PERSONAS: Lazy<Vec<BuyerPersona>> = Lazy::new(|| {
    vec![
        // Core: mujeres 45-64, mayor volumen y mejor ROAS
        persona(
            "mama-renovadora",
            "Mujer 45-54 Renovadora",
            "👩",
            25,
            "Mujer 45-54, casa propia, hijos grandes, tiene tiempo y ganas de renovar",
            "Llevo años mirando esa pared fea y diciéndome \"algún día\"",
            "Hacerlo yo sola sin depender del marido ni de nadie, orgullo personal",
            "Empoderada, práctica, directa",
        ),
        persona(
            "senora-55-64",
            "Mujer 55-64 Activa",
            "👩‍🦰",
            20,
            "Mujer 55-64, nido vacío, quiere la casa impecable, recibe visitas",
            "Me da cosa cuando vienen mis amigas y ven esa pared",
            "Que la casa esté linda para cuando vienen los hijos/nietos, orgullo",
            "Cálido, familiar, aspiracional pero realista",
        ),
        persona(
            "anfitriona",
            "Mujer 45-60 Anfitriona",
            "🥂",
            15,
            "Recibe familia y amigas seguido, le importa cómo se ve su casa",
            "Siempre tapo esa pared con algo cuando viene gente",
            "Orgullo social, que le pregunten dónde lo compró, sacar fotos",
            "Social, orgullosa, quiere presumir",
        ),
        persona(
            "practica",
            "Mujer 45-60 DIY",
            "🔧",
            10,
            "Mujer práctica que hace las cosas ella misma, no espera a nadie",
            "No quiero esperar que alguien tenga tiempo de ayudarme",
            "Autonomía, satisfacción de hacerlo sola, demostrar que puede",
            "Empoderada, resolutiva, sin vueltas",
        ),
        // Secundario: mujeres 65+
        persona(
            "abuela",
            "Mujer 65+ Abuela",
            "👵",
            8,
            "Mujer 65+, vienen los nietos, quiere la casa presentable",
            "Quiero que los nietos estén orgullosos de la casa de la abuela",
            "Dejar todo lindo, que la familia disfrute, cuidar lo suyo",
            "Tierno pero decidido, matriarca orgullosa",
        ),
        // Secundario: hombres 45-64
        persona(
            "hombre-45-54",
            "Hombre 45-54 Hacedor",
            "👨",
            6,
            "Hombre que hace cosas en la casa los fines de semana",
            "La patrona me tiene podrido con esa pared",
            "Quedar bien con la familia, proyecto de finde, satisfacción",
            "Práctico, directo, un poco humorístico",
        ),
        persona(
            "hombre-55-64",
            "Hombre 55-64 Resolutivo",
            "👴",
            4,
            "Hombre mayor que quiere solucionar sin complicarse",
            "No quiero obra ni quilombo, algo simple que funcione",
            "Resolver rápido, sin depender de terceros, tranquilidad",
            "Directo, anti-quilombo, práctico",
        ),
        // Exploración: segmentos menores
        persona(
            "inquilina",
            "Mujer 25-40 Inquilina",
            "🏠",
            5,
            "Mujer joven que alquila, no puede hacer obra pero quiere vivir lindo",
            "No puedo hacer nada porque no es mío pero esa pared me deprime",
            "Vivir lindo sin arriesgar el depósito, sentirse en casa propia",
            "Millennial/Gen-Z, relatable, un poco informal",
        ),
        persona(
            "decoradora",
            "Mujer 25-40 Estética",
            "🎨",
            4,
            "Le importa la estética, ve mucho Pinterest/Instagram/TikTok",
            "Mi casa no se ve como las que veo en las redes",
            "El look perfecto para sus fotos, que le pregunten dónde lo compró",
            "Trendy, visual, aspiracional",
        ),
        persona(
            "emprendedor",
            "Emprendedor Local",
            "🏪",
            3,
            "Dueño/a de local pequeño, peluquería, consultorio, negocio",
            "Mi local se ve viejo y no tengo presupuesto para obra",
            "Que el local se vea profesional, atraer clientes, imagen",
            "Profesional pero accesible, inversión inteligente",
        ),
    ]
});

/// Every persona, in catalog order.
pub fn all_personas() -> &'static [BuyerPersona] {
    &PERSONAS
}

/// Look up a persona by its id.
pub fn persona_by_id(id: &str) -> Option<&'static BuyerPersona> {
    PERSONAS.iter().find(|p| p.id == id)
}

/// Pick a persona at random, weighted by segment performance.
pub fn weighted_random_persona() -> &'static BuyerPersona {
    let total: u32 = PERSONAS.iter().map(|p| p.weight).sum();
    let mut roll = rand::thread_rng().gen_range(0..total);
    for persona in PERSONAS.iter() {
        if roll < persona.weight {
            return persona;
        }
        roll -= persona.weight;
    }
    // Unreachable while total == sum of weights
    &PERSONAS[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_ten_personas_with_unique_ids() {
        assert_eq!(all_personas().len(), 10);
        let ids: HashSet<_> = all_personas().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_core_segment_carries_most_weight() {
        let core: u32 = ["mama-renovadora", "senora-55-64", "anfitriona", "practica"]
            .iter()
            .map(|id| persona_by_id(id).unwrap().weight)
            .sum();
        let total: u32 = all_personas().iter().map(|p| p.weight).sum();
        assert!(core * 2 > total, "women 45-64 should hold the majority weight");
    }

    #[test]
    fn test_weighted_pick_always_returns_catalog_entry() {
        for _ in 0..200 {
            let p = weighted_random_persona();
            assert!(persona_by_id(&p.id).is_some());
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(persona_by_id("abuela").unwrap().emoji, "👵");
        assert!(persona_by_id("missing").is_none());
    }
}
