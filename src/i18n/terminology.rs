//! Built-in terminology tables.
//!
//! Official rulebook terminology for each target language, as
//! (English phrase, translated phrase) pairs. Order matters only for ties in
//! phrase length, where earlier entries are applied first.

/// English → Spanish terminology
pub const SPANISH_TERMS: &[(&str, &str)] = &[
    // Actions
    ("Shoot", "Disparar"),
    ("Fight", "Combatir"),
    ("Reposition", "Reposicionar"),
    ("Dash", "Carrera"),
    ("Fall Back", "Retirada"),
    ("Charge", "Carga"),
    ("Guard", "Vigilancia"),
    ("Pick Up Marker", "Recoger Marcador"),
    ("Place Marker", "Colocar Marcador"),
    ("Counteract", "Contraatacar"),
    // Common phrases
    ("An operative", "Un operativo"),
    ("operative", "operativo"),
    ("operatives", "operativos"),
    ("friendly operative", "operativo amigo"),
    ("friendly operatives", "operativos amigos"),
    ("enemy operative", "operativo enemigo"),
    ("enemy operatives", "operativos enemigos"),
    ("active operative", "operativo activo"),
    ("the active operative", "el operativo activo"),
    // Game terms
    ("Kill Team", "Kill Team"),
    ("Space Marine", "Marine Espacial"),
    ("Angels Of Death", "Ángeles de la Muerte"),
    ("kill team", "kill team"),
    ("killzone", "zona de combate"),
    ("turning point", "punto de inflexión"),
    ("activation", "activación"),
    ("counteraction", "contrataque"),
    ("control range", "alcance de control"),
    ("within control range", "dentro del alcance de control"),
    // Keywords
    ("LEADER", "LÍDER"),
    // Weapon rules and stats
    ("Critical success", "Éxito crítico"),
    ("critical success", "éxito crítico"),
    ("critical successes", "éxitos críticos"),
    ("normal success", "éxito normal"),
    ("normal successes", "éxitos normales"),
    ("attack dice", "dados de ataque"),
    ("defence dice", "dados de defensa"),
    ("cover saves", "salvaciones de cobertura"),
    // Status
    ("incapacitated", "incapacitado"),
    // Archetypes
    ("Security", "Seguridad"),
    ("Seek & Destroy", "Buscar y Destruir"),
    ("Recon", "Reconocimiento"),
    ("Infiltration", "Infiltración"),
];

/// English → French terminology
pub const FRENCH_TERMS: &[(&str, &str)] = &[
    // Actions
    ("Shoot", "Tirer"),
    ("Fight", "Combattre"),
    ("Reposition", "Repositionner"),
    ("Dash", "Ruée"),
    ("Fall Back", "Repli"),
    ("Charge", "Charge"),
    ("Guard", "Vigilance"),
    ("Pick Up Marker", "Ramasser un Marqueur"),
    ("Place Marker", "Placer un Marqueur"),
    ("Counteract", "Contre-attaquer"),
    // Common phrases
    ("An operative", "Un opératif"),
    ("operative", "opératif"),
    ("operatives", "opératifs"),
    ("friendly operative", "opératif allié"),
    ("friendly operatives", "opératifs alliés"),
    ("enemy operative", "opératif ennemi"),
    ("enemy operatives", "opératifs ennemis"),
    ("active operative", "opératif actif"),
    ("the active operative", "l'opératif actif"),
    // Game terms
    ("Kill Team", "Kill Team"),
    ("Space Marine", "Marine Spatial"),
    ("Angels Of Death", "Anges de la Mort"),
    ("kill team", "kill team"),
    ("killzone", "zone de combat"),
    ("turning point", "point tournant"),
    ("activation", "activation"),
    ("counteraction", "contre-attaque"),
    ("control range", "portée de contrôle"),
    ("within control range", "dans la portée de contrôle"),
    // Keywords
    ("LEADER", "CHEF"),
    // Weapon rules and stats
    ("Critical success", "Succès critique"),
    ("critical success", "succès critique"),
    ("critical successes", "succès critiques"),
    ("normal success", "succès normal"),
    ("normal successes", "succès normaux"),
    ("attack dice", "dés d'attaque"),
    ("defence dice", "dés de défense"),
    ("cover saves", "sauvegardes de couverture"),
    // Status
    ("incapacitated", "hors de combat"),
    // Archetypes
    ("Security", "Sécurité"),
    ("Seek & Destroy", "Rechercher et Détruire"),
    ("Recon", "Reconnaissance"),
    ("Infiltration", "Infiltration"),
];
