//! Funnel-stage configurations
//!
//! Word and time budgets per stage, plus the generation instructions that go
//! verbatim into the prompt. The hard word cap exists because long reads blow
//! the video length; the model is told not to cross it under any
//! circumstance.

use crate::types::FunnelStage;

/// Generation parameters for one funnel stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunnelConfig {
    pub stage: FunnelStage,
    /// Display name, e.g. "TOF — Prospección"
    pub name: &'static str,
    /// Short description shown under the stage selector
    pub desc: &'static str,
    /// Ideal word range (min, max)
    pub target_words: (u32, u32),
    /// Absolute word cap the model must not cross
    pub max_words: u32,
    /// Target duration range in seconds (min, max)
    pub target_time: (u32, u32),
    /// Instructions injected verbatim into the prompt
    pub instructions: &'static str,
}

const TOF: FunnelConfig = FunnelConfig {
    stage: FunnelStage::Tof,
    name: "TOF — Prospección",
    desc: "Audiencia fría. Hook de dolor fuerte, awareness, mostrar el problema. \
           20-30 seg · 60-90 palabras · máximo 100",
    target_words: (60, 90),
    max_words: 100,
    target_time: (20, 30),
    instructions: "Audiencia FRÍA que no conoce el producto. Hook de dolor MUY fuerte en los \
                   primeros 5 segundos. Mostrar el problema, generar identificación. No dar \
                   demasiados specs, enfocarse en el dolor y la promesa de solución. CORTO Y \
                   DIRECTO.",
};

const MOF: FunnelConfig = FunnelConfig {
    stage: FunnelStage::Mof,
    name: "MOF — Consideración",
    desc: "Ya vieron algo. Diferenciación, specs que destruyen objeciones, por qué \
           RenovaFácil. 25-35 seg · 70-100 palabras · máximo 110",
    target_words: (70, 100),
    max_words: 110,
    target_time: (25, 35),
    instructions: "Audiencia TIBIA que ya vio algo del producto. Diferenciación: por qué \
                   RenovaFácil es mejor. Specs que destruyen objeciones (4.5mm de espesor, \
                   adhesivo premium, etc). MANTENÉ EL TEXTO CORTO Y DIRECTO.",
};

const BOF: FunnelConfig = FunnelConfig {
    stage: FunnelStage::Bof,
    name: "BOF — Retargeting",
    desc: "Ya conocen el producto. Urgencia, ofertas, empujón final. \
           15-25 seg · 45-70 palabras · máximo 80",
    target_words: (45, 70),
    max_words: 80,
    target_time: (15, 25),
    instructions: "Audiencia CALIENTE que ya conoce el producto y consideró comprar. Urgencia \
                   y empujón final. Ofertas (envío gratis, cuotas sin interés). Frases cortas, \
                   directas. MUY BREVE.",
};

const METRALLETA: FunnelConfig = FunnelConfig {
    stage: FunnelStage::Metralleta,
    name: "METRALLETA — Directo",
    desc: "Estilo Vayzen: frases de 3-6 palabras, una por línea, ritmo de balas. \
           20-30 seg · 60-90 palabras · máximo 100",
    target_words: (60, 90),
    max_words: 100,
    target_time: (20, 30),
    instructions: "ESTILO METRALLETA - COPIA EXACTA DEL ESTILO VAYZEN:\n\n\
REGLAS ESTRICTAS:\n\
1. MÁXIMO 6 PALABRAS POR LÍNEA - esto es innegociable\n\
2. Cada línea es UNA idea, UN golpe\n\
3. NO uses comas para conectar ideas - usá punto y nueva línea\n\
4. Tono INFORMATIVO, no emocional\n\
5. Sin storytelling, sin \"imaginá\", sin escenas\n\
6. Cierre con TAGLINE MEMORABLE (no \"comprá ahora\")\n\n\
ESTRUCTURA EXACTA:\n\
1. HOOK NEGADOR (1 línea): \"No hace falta X para Y\"\n\
2. PRODUCTO (2 líneas): Qué es, qué hace\n\
3. RÁFAGA DE SPECS (8-10 líneas de 3-6 palabras cada una)\n\
4. RESULTADO (2 líneas): Look, textura\n\
5. OBJECIONES (3 líneas cortas): Resiste, no daña, etc\n\
6. OFERTA (2 líneas): Envío gratis. Tres cuotas.\n\
7. TAGLINE CIERRE (2 líneas punch): Frase memorable\n\n\
IMPORTANTE: Cada línea va en renglón separado, NO escribas párrafos",
};

const HIBRIDO: FunnelConfig = FunnelConfig {
    stage: FunnelStage::Hibrido,
    name: "HÍBRIDO — Emoción + Ritmo",
    desc: "Lo mejor de ambos: hook emocional + ráfaga de beneficios + specs con contexto \
           emocional. 20-30 seg · 60-90 palabras · máximo 100",
    target_words: (60, 90),
    max_words: 100,
    target_time: (20, 30),
    instructions: "ESTILO HÍBRIDO - LO MEJOR DE AMBOS MUNDOS:\n\n\
COMBINA:\n\
- Hook emocional tipo ganadores (\"¿Querés ese look de Pinterest?\", \"¿Te da pánico que \
miren esa pared?\")\n\
- Ritmo rápido de la competencia (frases cortas, una idea por línea)\n\
- Specs CON emoción (no \"4.5mm de espesor\" sino \"el relieve de 4.5mm crea un juego de \
luces y sombras\")\n\
- Cierre memorable y aspiracional\n\n\
ESTRUCTURA:\n\
1. HOOK EMOCIONAL (1-2 líneas): Pregunta suave tipo copies ganadores\n\
2. PROBLEMA RÁPIDO (2 líneas): Identificación express\n\
3. SOLUCIÓN + SPECS EMOCIONALES (4-5 líneas): Ritmo rápido pero con alma\n\
4. RÁFAGA DE BENEFICIOS (3-4 líneas cortas): Sin obra. Sin ensuciar. Sin ayuda.\n\
5. TRANSFORMACIÓN + CTA (2-3 líneas): De vergüenza a orgullo. Hacé clic ahora.\n\n\
TONO: Aspiracional y cálido, pero con ritmo punchy. Como hablarle a una amiga que querés \
ayudar.",
};

/// Configuration for a funnel stage.
pub fn funnel_config(stage: FunnelStage) -> &'static FunnelConfig {
    match stage {
        FunnelStage::Tof => &TOF,
        FunnelStage::Mof => &MOF,
        FunnelStage::Bof => &BOF,
        FunnelStage::Metralleta => &METRALLETA,
        FunnelStage::Hibrido => &HIBRIDO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stage_has_a_config() {
        for stage in FunnelStage::ALL {
            let cfg = funnel_config(stage);
            assert_eq!(cfg.stage, stage);
            assert!(!cfg.instructions.is_empty());
        }
    }

    #[test]
    fn test_word_budgets_are_coherent() {
        for stage in FunnelStage::ALL {
            let cfg = funnel_config(stage);
            let (lo, hi) = cfg.target_words;
            assert!(lo < hi, "{stage}: target range inverted");
            assert!(hi < cfg.max_words, "{stage}: cap must exceed target max");
        }
    }

    #[test]
    fn test_bof_is_the_shortest_stage() {
        let bof = funnel_config(FunnelStage::Bof);
        for stage in FunnelStage::ALL {
            assert!(funnel_config(stage).max_words >= bof.max_words);
        }
    }
}
