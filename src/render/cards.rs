//! Projection of domain values into nodes.
//!
//! These functions own no state: each call clones a template, fills it and
//! returns the node. Character cards also get the affordances that open the
//! movies facet (the card body and an explicit `Películas` button both lead to
//! the same transition).

use super::fragment::{Node, Tone};
use super::template::{Affordance, AffordanceTarget, Templates, Trigger};
use crate::domain::{Character, FacetKind, Failure};

/// Separator used when joining a character's titles into one summary line.
const TITLE_SEPARATOR: &str = ", ";

/// Builds the card for one character.
///
/// # Errors
///
/// Returns a `RenderError` failure if the card template lacks one of the
/// slots the card needs.
///
/// # Examples
///
/// ```
/// use character_finder::domain::Character;
/// use character_finder::render::{render_character_card, Node, Templates};
///
/// let mickey = Character::new(4703, "Mickey Mouse").with_films(["Fantasia"]);
/// let Node::Card(card) = render_character_card(&mickey, &Templates::default())? else {
///     unreachable!()
/// };
/// assert_eq!(card.text("p", 0), Some("Películas: Fantasia"));
/// # Ok::<(), character_finder::domain::Failure>(())
/// ```
pub fn render_character_card(
    character: &Character,
    templates: &Templates,
) -> Result<Node, Failure> {
    let mut card = templates.card.instantiate();

    card.fill_image("img", 0, &character.image_url, &character.name)?;
    card.fill_text("h5", 0, &character.name)?;
    card.fill_text("p", 0, summary_line("Películas", &character.films))?;
    card.fill_text("p", 1, summary_line("Series de TV", &character.tv_shows))?;
    card.fill_text("p", 2, summary_line("Videojuegos", &character.video_games))?;

    let open_movies = Trigger::OpenFacet {
        character: character.id,
        facet: FacetKind::Movies,
    };
    card.attach(Affordance {
        target: AffordanceTarget::CardBody,
        trigger: open_movies,
    });
    card.attach(Affordance {
        target: AffordanceTarget::Button(FacetKind::Movies.button_label().to_string()),
        trigger: open_movies,
    });

    Ok(Node::Card(card))
}

/// Builds one film or series card titled `"{label}: {title}"`.
///
/// # Errors
///
/// Returns a `RenderError` failure if the episode template lacks its title
/// slot.
pub fn render_episode_card(
    title: &str,
    facet: FacetKind,
    templates: &Templates,
) -> Result<Node, Failure> {
    let mut episode = templates.episode.instantiate();
    episode.fill_text(".card-title", 0, format!("{}: {title}", facet.label()))?;
    Ok(Node::Episode(episode))
}

/// Builds the pair of facet buttons shown in a character's detail.
#[must_use]
pub fn render_detail_buttons(character: &Character) -> Node {
    let buttons = [FacetKind::Movies, FacetKind::Series]
        .into_iter()
        .map(|facet| Affordance {
            target: AffordanceTarget::Button(facet.button_label().to_string()),
            trigger: Trigger::OpenFacet {
                character: character.id,
                facet,
            },
        })
        .collect();
    Node::DetailButtons(buttons)
}

#[must_use]
pub fn render_notice(tone: Tone, text: impl Into<String>) -> Node {
    Node::Notice {
        tone,
        text: text.into(),
    }
}

fn summary_line(label: &str, titles: &[String]) -> String {
    format!("{label}: {}", titles.join(TITLE_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::template::{Template, TemplateNode};

    fn card_of(character: &Character) -> TemplateNode {
        match render_character_card(character, &Templates::default()).unwrap() {
            Node::Card(card) => card,
            other => panic!("expected a card, got {other:?}"),
        }
    }

    #[test]
    fn card_fills_every_slot() {
        let ariel = Character::new(221, "Ariel")
            .with_image("https://example.org/ariel.png")
            .with_films(["The Little Mermaid", "The Little Mermaid II"])
            .with_tv_shows(["The Little Mermaid"])
            .with_video_games(["Kingdom Hearts"]);

        let card = card_of(&ariel);
        assert_eq!(card.image("img", 0), Some(("https://example.org/ariel.png", "Ariel")));
        assert_eq!(card.text("h5", 0), Some("Ariel"));
        assert_eq!(
            card.text("p", 0),
            Some("Películas: The Little Mermaid, The Little Mermaid II")
        );
        assert_eq!(card.text("p", 1), Some("Series de TV: The Little Mermaid"));
        assert_eq!(card.text("p", 2), Some("Videojuegos: Kingdom Hearts"));
    }

    #[test]
    fn empty_lists_keep_their_label() {
        let card = card_of(&Character::new(1, "Nobody"));
        assert_eq!(card.text("p", 1), Some("Series de TV: "));
    }

    #[test]
    fn both_card_affordances_open_movies() {
        let card = card_of(&Character::new(42, "Pluto"));
        let expected = Trigger::OpenFacet {
            character: 42,
            facet: FacetKind::Movies,
        };

        assert_eq!(card.affordances().len(), 2);
        assert!(card.affordances().iter().all(|a| a.trigger == expected));
        assert!(card
            .affordances()
            .iter()
            .any(|a| a.target == AffordanceTarget::CardBody));
    }

    #[test]
    fn episode_title_is_prefixed_with_the_facet_label() {
        let node = render_episode_card("Show A", FacetKind::Series, &Templates::default()).unwrap();
        let Node::Episode(episode) = node else {
            panic!("expected an episode card");
        };
        assert_eq!(episode.text(".card-title", 0), Some("Serie de TV: Show A"));
    }

    #[test]
    fn wrong_template_surfaces_a_render_error() {
        let templates = Templates {
            card: Template::episode(),
            ..Templates::default()
        };
        assert!(render_character_card(&Character::new(1, "Max"), &templates).is_err());
    }
}
