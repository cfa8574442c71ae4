//! Image-variable tables
//!
//! Twelve lettered groups of coded scene variables. An image combo rolls one
//! variable per group (several from the decoration group) and composes the
//! descriptions into a scene prompt.

use chrono::Utc;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::types::{ComboPick, ImageCombo, ImageVariable};

/// How many decoration items (group E) each combo carries.
const DECOR_PICKS: usize = 3;

/// One lettered variable group, e.g. `B — Luz`.
#[derive(Debug, Clone)]
pub struct ImageGroup {
    pub letter: char,
    /// Display name, e.g. "Ambiente"
    pub name: &'static str,
    pub variables: Vec<ImageVariable>,
}

fn var(code: &str, name: &str, desc: &str) -> ImageVariable {
    ImageVariable {
        code: code.into(),
        name: name.into(),
        desc: desc.into(),
        technical: None,
        style: None,
    }
}

fn var_tech(code: &str, name: &str, desc: &str, technical: &str) -> ImageVariable {
    ImageVariable {
        technical: Some(technical.into()),
        ..var(code, name, desc)
    }
}

fn var_style(code: &str, name: &str, desc: &str, style: &str) -> ImageVariable {
    ImageVariable {
        style: Some(style.into()),
        ..var(code, name, desc)
    }
}

static GROUPS: Lazy<Vec<ImageGroup>> = Lazy::new(|| {
    vec![
        ImageGroup {
            letter: 'A',
            name: "Ambiente",
            variables: vec![
                var("A1", "Living moderno", "Modern minimalist living room with grey linen sofa, wooden coffee table, monstera plant"),
                var("A2", "Dormitorio cozy", "Cozy bedroom with white bedding, beige throw blanket, two nightstands with warm lamps"),
                var("A3", "Home office", "Stylish home office with oak desk, laptop, succulent plant, ergonomic chair"),
                var("A4", "Comedor", "Modern dining area with round wooden table, wishbone chairs, pendant lamp"),
                var("A5", "Entrada/hall", "Apartment entrance hallway with console table, mirror, key bowl, welcoming"),
                var("A6", "Cocina", "Bright kitchen corner with breakfast bar, stools, coffee machine, modern"),
                var("A7", "Rincón lectura", "Reading nook with comfortable armchair, floor lamp, small bookshelf"),
                var("A8", "Nursery bebé", "Baby nursery with crib, soft toys, gentle colors, wall panels as accent"),
                var("A9", "Cuarto teen", "Teen bedroom with desk area, modern vibe, tasteful decor"),
                var("A10", "Balcón/sunroom", "Balcony or sunroom indoor space with plants, wicker furniture, natural light"),
            ],
        },
        ImageGroup {
            letter: 'B',
            name: "Luz",
            variables: vec![
                var("B1", "Golden hour", "Golden hour afternoon, warm sunlight streaming from window, long beautiful shadows on the 3D brick texture"),
                var("B2", "Mañana suave", "Soft morning light, gentle and fresh, slight cool tones warming up gradually"),
                var("B3", "Mediodía brillante", "Midday bright, clean and crisp natural light, minimal shadows, fresh feeling"),
                var("B4", "Tarde dramática", "Late afternoon, sun low, dramatic long shadows on 3D brick texture creating depth"),
                var("B5", "Día nublado", "Overcast day, soft diffused light, no harsh shadows, even gentle illumination"),
                var("B6", "Noche con luces", "Evening with warm artificial lights on, cozy ambient glow, intimate atmosphere"),
                var("B7", "Amanecer", "Sunrise, first light of day, pink and orange tint on walls, hopeful mood"),
                var("B8", "Blue hour", "Blue hour just after sunset, moody with interior lights creating warm contrast"),
            ],
        },
        ImageGroup {
            letter: 'C',
            name: "Ángulo",
            variables: vec![
                var("C1", "Frontal", "Straight-on eye-level shot, wall is the hero, symmetric balanced composition"),
                var("C2", "Ángulo izquierda", "Slight 30-degree angle from left, showing wall depth and room context"),
                var("C3", "Ángulo derecha", "Slight 30-degree angle from right, window visible, natural light source shown"),
                var("C4", "Bajo (grandioso)", "Low angle looking up, makes room feel grand and spacious, impressive"),
                var("C5", "Alto (cenital)", "High angle looking down, shows floor and furniture layout, overview"),
                var("C6", "Esquina", "Corner shot, two walls visible, one with panels as focal point, dynamic"),
                var("C7", "Desde puerta", "Through doorway shot, framing the room with 3D brick wall as backdrop"),
                var("C8", "Close-up textura", "Close-up detail shot, tight on wall texture with room softly blurred behind"),
            ],
        },
        ImageGroup {
            letter: 'D',
            name: "Composición",
            variables: vec![
                var("D1", "Minimalista", "Minimalist composition, lots of negative space, few elements, clean and airy"),
                var("D2", "Editorial styled", "Styled and layered with multiple decor items, magazine editorial feel"),
                var("D3", "Vivido/casual", "Lived-in casual, slight imperfection, book left open, coffee cup, authentic"),
                var("D4", "Simétrico", "Symmetrical and balanced composition, centered furniture, orderly, harmonious"),
                var("D5", "Asimétrico", "Asymmetrical dynamic composition, rule of thirds, visual tension, interesting"),
                var("D6", "Cozy/íntimo", "Tight and cozy, filled frame, intimate feeling, enveloping warmth"),
                var("D7", "Expansivo", "Expansive and open, wide shot, room feels large and spacious"),
                var("D8", "Viñeta", "Vignette style, darker edges, focus on bright center with textured wall"),
            ],
        },
        ImageGroup {
            letter: 'E',
            name: "Decoración",
            variables: vec![
                var("E1", "Monstera", "monstera or fiddle leaf fig plant in ceramic pot"),
                var("E2", "Suculentas", "small succulent arrangement on shelf or table"),
                var("E3", "Libros", "stack of coffee table books about design or travel"),
                var("E4", "Florero eucalipto", "ceramic vase with eucalyptus branches or dried flowers"),
                var("E5", "Canasto", "woven basket for storage or as plant holder"),
                var("E6", "Manta textura", "textured throw blanket, chunky knit or linen"),
                var("E7", "Almohadones", "2-3 decorative cushions in neutral tones"),
                var("E8", "Escultura/arte", "small sculptural object or art piece"),
                var("E9", "Velas", "candles, pillar style or in glass holders"),
                var("E10", "Espejo", "round mirror on wall or leaning against it"),
                var("E11", "Lámpara", "pendant lamp or floor lamp with modern design"),
                var("E12", "Bandeja curada", "small tray with curated items like candle, plant, book"),
                var("E13", "Taza café", "coffee mug or tea cup as lifestyle touch"),
                var("E14", "Cuadro", "framed artwork or photo, simple, not competing"),
                var("E15", "Tabla frutas", "wooden cutting board with fruit for kitchen scenes"),
            ],
        },
        ImageGroup {
            letter: 'F',
            name: "Cobertura",
            variables: vec![
                var("F1", "Pared completa", "Full wall coverage, entire wall covered with white 3D brick panels"),
                var("F2", "Pared acento", "Accent wall style, one wall covered with panels, others painted neutral"),
                var("F3", "Media pared", "Half wall wainscoting style, panels on lower half of wall"),
                var("F4", "Sección feature", "Feature section, large rectangle of panels as headboard or backdrop"),
                var("F5", "Parcial artístico", "Partial artistic coverage, panels cover 70% with intentional edge visible"),
            ],
        },
        ImageGroup {
            letter: 'G',
            name: "Temperatura",
            variables: vec![
                var("G1", "Cálido dorado", "Warm golden color temperature, yellows and oranges, cozy inviting feeling"),
                var("G2", "Neutro balanceado", "Neutral balanced temperature, true whites and grays, clean modern"),
                var("G3", "Frío fresco", "Cool fresh temperature, slight blue tint, modern and crisp feeling"),
                var("G4", "Contraste cálido/frío", "Warm highlights with cool shadows, interesting contrast between sun and shade"),
                var("G5", "Terroso", "Earthy tones throughout, browns, beiges, greens, organic natural feeling"),
            ],
        },
        ImageGroup {
            letter: 'H',
            name: "Mood",
            variables: vec![
                var("H1", "Aspiracional", "Aspirational luxury mood, \"I want to live here\", high-end but achievable"),
                var("H2", "Cozy hygge", "Cozy hygge atmosphere, warm and inviting, makes you want to curl up"),
                var("H3", "Fresco energizante", "Fresh and energizing mood, bright, motivating, new beginnings feeling"),
                var("H4", "Sereno calmo", "Calm and serene atmosphere, spa-like, peaceful retreat feeling"),
                var("H5", "Urbano sofisticado", "Sophisticated urban mood, modern city apartment vibe, stylish"),
                var("H6", "Familiar cálido", "Family warm atmosphere, welcoming, safe, true home feeling"),
                var("H7", "Creativo artístico", "Creative inspiring mood, artistic, unique personality expressed"),
                var("H8", "Romántico suave", "Romantic soft atmosphere, gentle, intimate, dreamy feeling"),
            ],
        },
        ImageGroup {
            letter: 'I',
            name: "Estación",
            variables: vec![
                var("I1", "Primavera", "Spring freshness, light fabrics, flowers visible, bright optimistic"),
                var("I2", "Verano", "Summer warmth, sun-drenched space, airy and relaxed feeling"),
                var("I3", "Otoño", "Autumn cozy, warm tones, knit textures, candles, rich colors"),
                var("I4", "Invierno", "Winter hygge, soft warm lighting, cozy blankets, intimate feeling"),
                var("I5", "Neutral atemporal", "Neutral timeless, no specific season indicated, always relevant"),
                var("I6", "Festivo sutil", "Very subtle festive touch, minimal holiday hint, not obvious"),
            ],
        },
        ImageGroup {
            letter: 'J',
            name: "Efecto",
            variables: vec![
                var("J1", "Rayo de sol", "Visible sunbeam, rays of light catching dust particles, magical"),
                var("J2", "Sombras persianas", "Shadow play from window blinds creating lines on the 3D brick wall"),
                var("J3", "Reflejos espejo", "Reflection in mirror or glass surface showing the textured wall"),
                var("J4", "Sombras plantas", "Leaf shadows from plants dancing on the 3D brick surface"),
                var("J5", "Vapor/mist", "Steam or mist from coffee cup or humidifier, atmospheric"),
                var("J6", "Mascota durmiendo", "Pet cat or dog sleeping or resting in scene, lifestyle touch"),
                var("J7", "Cortina movimiento", "Sheer curtain caught mid-movement from gentle breeze"),
                var("J8", "Bokeh luces", "Soft blurred bokeh lights in background, evening ambiance"),
                var("J9", "Sin efecto", "No special effect, clean straightforward image"),
            ],
        },
        ImageGroup {
            letter: 'K',
            name: "Estilo Foto",
            variables: vec![
                var_tech("K1", "UGC iPhone real",
                    "Photo taken with iPhone by homeowner, slightly imperfect framing, natural unposed feel, real Argentine middle-class home",
                    "iPhone 14 photo quality, slight lens distortion, natural unedited colors, no professional lighting"),
                var_tech("K2", "UGC con esfuerzo",
                    "Homeowner tried to take a nice photo, cleaned up a bit but still real, visible everyday items",
                    "Smartphone photo, decent lighting from window, owner tried to make it look nice but authentic"),
                var_tech("K3", "Antes/después real",
                    "Transformation photo style, focus on the wall improvement, rest of room is normal Argentine home",
                    "Smartphone quality, documentation style, showing real improvement not fantasy"),
                var_tech("K4", "Video still WhatsApp",
                    "Looks like a frame from a WhatsApp video showing renovation, slightly blurry motion, very authentic",
                    "Low resolution feel, video frame quality, compressed colors, super authentic viral potential"),
                var_tech("K5", "Semi-profesional",
                    "Nice photo but clearly a real home, good natural light, homeowner has some eye for decor",
                    "Good smartphone camera, natural light well used, edited with VSCO or Lightroom mobile"),
                var_tech("K6", "Pinterest aspiracional",
                    "Magazine quality interior design photo, professionally styled, luxury feel, perfectly curated decor",
                    "8K professional camera, perfect lighting setup, heavily styled and edited"),
                var_tech("K7", "Depto alquiler BA",
                    "Typical Buenos Aires rental apartment, small spaces, creative use of limited room",
                    "Smartphone photo, cramped but cozy space, real rental apartment vibe"),
                var_tech("K8", "Casa GBA suburbio",
                    "House in Gran Buenos Aires suburbs, larger spaces, typical Argentine middle-class home",
                    "Smartphone photo, natural Argentine home architecture"),
            ],
        },
        ImageGroup {
            letter: 'L',
            name: "Color Placa",
            variables: vec![
                var_style("L1", "Ladrillo Blanco",
                    "SELF-ADHESIVE 3D FOAM WALL PANELS in WHITE. Material: PE foam, soft to touch, lightweight. Pattern: Brick pattern with 3D relief texture.",
                    "Versátil, luminoso, combina con todo, estilo nórdico/minimalista"),
                var_style("L2", "Ladrillo Negro",
                    "SELF-ADHESIVE 3D FOAM WALL PANELS in BLACK. Material: PE foam, soft to touch, lightweight. Pattern: Brick pattern with 3D relief texture.",
                    "Moderno, dramático, ideal para acentos, estilo industrial/loft"),
                var_style("L3", "Ladrillo Gris",
                    "SELF-ADHESIVE 3D FOAM WALL PANELS in GRAY. Material: PE foam, soft to touch, lightweight. Pattern: Brick pattern with 3D relief texture.",
                    "Neutro, elegante, estilo contemporáneo, combina fácil"),
                var_style("L4", "Piedra Rústica",
                    "SELF-ADHESIVE 3D FOAM WALL PANELS with RUSTIC STONE PRINT. Material: PE foam with printed texture overlay.",
                    "Rústico, cálido, estilo campo/mediterráneo, acogedor"),
                var_style("L5", "Mármol Carrara",
                    "SELF-ADHESIVE 3D FOAM WALL PANELS with MARBLE PRINT. Material: PE foam with smooth printed surface.",
                    "Lujoso, elegante, estilo premium/glam, sofisticado"),
            ],
        },
    ]
});

/// Every variable group, A through L.
pub fn image_groups() -> &'static [ImageGroup] {
    &GROUPS
}

/// Pick one variable from a group at random.
pub fn random_variable(group: &ImageGroup) -> &ImageVariable {
    group
        .variables
        .choose(&mut rand::thread_rng())
        .expect("image groups are never empty")
}

/// Pick up to `count` distinct variables from a group at random.
pub fn random_variables(group: &ImageGroup, count: usize) -> Vec<&ImageVariable> {
    group
        .variables
        .choose_multiple(&mut rand::thread_rng(), count.min(group.variables.len()))
        .collect()
}

/// Roll a fresh combo: one variable per group, several decoration items.
///
/// The headline fields start empty; the caller fills them in once the
/// language model answers.
pub fn roll_combo() -> ImageCombo {
    let picks: Vec<ComboPick> = image_groups()
        .iter()
        .map(|group| {
            let variables = if group.letter == 'E' {
                random_variables(group, DECOR_PICKS)
                    .into_iter()
                    .cloned()
                    .collect()
            } else {
                vec![random_variable(group).clone()]
            };
            ComboPick {
                group: group.name.to_string(),
                variables,
            }
        })
        .collect();

    ImageCombo {
        id: Uuid::new_v4().to_string(),
        combo_code: combo_code(&picks),
        scene_prompt: compose_scene_prompt(&picks),
        picks,
        headline: String::new(),
        headline_context: String::new(),
        timestamp: Utc::now(),
        is_favorite: false,
    }
}

/// Joined variable codes, e.g. `A3-B1-C6-D2-E1-E7-E13-...`.
fn combo_code(picks: &[ComboPick]) -> String {
    picks
        .iter()
        .flat_map(|p| p.variables.iter().map(|v| v.code.as_str()))
        .collect::<Vec<_>>()
        .join("-")
}

/// Compose the picked descriptions into one scene paragraph, decoration
/// items folded into a single sentence.
fn compose_scene_prompt(picks: &[ComboPick]) -> String {
    let mut sentences = Vec::new();
    for pick in picks {
        if pick.variables.len() > 1 {
            let items: Vec<&str> = pick.variables.iter().map(|v| v.desc.as_str()).collect();
            sentences.push(format!("Decor: {}", items.join("; ")));
        } else if let Some(variable) = pick.variables.first() {
            let mut sentence = variable.desc.clone();
            if let Some(technical) = &variable.technical {
                sentence.push_str(". ");
                sentence.push_str(technical);
            }
            sentences.push(sentence);
        }
    }
    sentences.join(". ") + "."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_groups_a_through_l() {
        let letters: Vec<char> = image_groups().iter().map(|g| g.letter).collect();
        assert_eq!(letters, ('A'..='L').collect::<Vec<_>>());
    }

    #[test]
    fn test_codes_carry_their_group_letter() {
        for group in image_groups() {
            for variable in &group.variables {
                assert!(
                    variable.code.starts_with(group.letter),
                    "{} not in group {}",
                    variable.code,
                    group.letter
                );
            }
        }
    }

    #[test]
    fn test_random_variables_are_distinct() {
        let decor = &image_groups()[4];
        assert_eq!(decor.letter, 'E');
        for _ in 0..50 {
            let picks = random_variables(decor, 3);
            assert_eq!(picks.len(), 3);
            let mut codes: Vec<_> = picks.iter().map(|v| v.code.as_str()).collect();
            codes.sort();
            codes.dedup();
            assert_eq!(codes.len(), 3);
        }
    }

    #[test]
    fn test_oversized_request_is_clamped() {
        let coverage = image_groups().iter().find(|g| g.letter == 'F').unwrap();
        assert_eq!(random_variables(coverage, 99).len(), coverage.variables.len());
    }

    #[test]
    fn test_rolled_combo_covers_every_group() {
        let combo = roll_combo();
        assert_eq!(combo.picks.len(), image_groups().len());

        let total_vars: usize = combo.picks.iter().map(|p| p.variables.len()).sum();
        // 11 single-pick groups + 3 decoration items
        assert_eq!(total_vars, 11 + DECOR_PICKS);

        assert_eq!(combo.combo_code.split('-').count(), total_vars);
        assert!(combo.combo_code.starts_with('A'));
        assert!(combo.headline.is_empty());
        assert!(!combo.is_favorite);
    }

    #[test]
    fn test_scene_prompt_contains_every_description() {
        let combo = roll_combo();
        for pick in &combo.picks {
            for variable in &pick.variables {
                assert!(
                    combo.scene_prompt.contains(&variable.desc),
                    "scene prompt missing {}",
                    variable.code
                );
            }
        }
        assert!(combo.scene_prompt.contains("Decor: "));
        assert!(combo.scene_prompt.ends_with('.'));
    }
}
