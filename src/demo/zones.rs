//! Interaction zones and proximity checks.

use glam::DVec3;

use super::ZONE_RADIUS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneId {
    About,
    Skills,
    Projects,
    Contact,
}

impl ZoneId {
    pub const ALL: [ZoneId; 4] = [Self::About, Self::Skills, Self::Projects, Self::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionZone {
    pub id: ZoneId,
    pub position: DVec3,
    pub radius: f64,
}

impl InteractionZone {
    pub fn contains(&self, point: DVec3) -> bool {
        point.distance(self.position) < self.radius
    }
}

pub fn default_zones() -> Vec<InteractionZone> {
    ZoneId::ALL
        .into_iter()
        .map(|id| {
            let position = match id {
                ZoneId::About => DVec3::new(0.0, 1.0, -50.0),
                ZoneId::Skills => DVec3::new(50.0, 1.0, 0.0),
                ZoneId::Projects => DVec3::new(-50.0, 1.0, 0.0),
                ZoneId::Contact => DVec3::new(0.0, 1.0, 50.0),
            };
            InteractionZone {
                id,
                position,
                radius: ZONE_RADIUS,
            }
        })
        .collect()
}

/// The closest zone whose radius contains `point`. Equal distances resolve to
/// the zone listed first.
pub fn active_zone(point: DVec3, zones: &[InteractionZone]) -> Option<&InteractionZone> {
    zones
        .iter()
        .filter(|zone| zone.contains(point))
        .fold(None, |best: Option<&InteractionZone>, zone| match best {
            Some(current)
                if current.position.distance(point) <= zone.position.distance(point) =>
            {
                Some(current)
            }
            _ => Some(zone),
        })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    pub active: Option<ZoneId>,
    /// Zone whose panel should open this frame.
    pub open_panel: Option<ZoneId>,
}

pub fn interaction(point: DVec3, zones: &[InteractionZone], interact_held: bool) -> Interaction {
    let active = active_zone(point, zones).map(|zone| zone.id);
    Interaction {
        active,
        open_panel: active.filter(|_| interact_held),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_point_is_outside_every_zone() {
        let zones = default_zones();
        assert_eq!(active_zone(crate::demo::CHASSIS_SPAWN, &zones), None);
    }

    #[test]
    fn radius_boundary_is_exclusive() {
        let zones = default_zones();
        let edge = DVec3::new(0.0, 1.0, -35.0);
        assert_eq!(active_zone(edge, &zones), None);
        let inside = DVec3::new(0.0, 1.0, -35.5);
        assert_eq!(active_zone(inside, &zones).map(|z| z.id), Some(ZoneId::About));
    }

    #[test]
    fn overlapping_zones_pick_the_nearest() {
        let zones = vec![
            InteractionZone {
                id: ZoneId::About,
                position: DVec3::ZERO,
                radius: 10.0,
            },
            InteractionZone {
                id: ZoneId::Skills,
                position: DVec3::new(6.0, 0.0, 0.0),
                radius: 10.0,
            },
        ];
        let near_second = DVec3::new(5.0, 0.0, 0.0);
        assert_eq!(active_zone(near_second, &zones).map(|z| z.id), Some(ZoneId::Skills));

        let midway = DVec3::new(3.0, 0.0, 0.0);
        assert_eq!(active_zone(midway, &zones).map(|z| z.id), Some(ZoneId::About));
    }

    #[test]
    fn panel_opens_only_while_interacting_inside_a_zone() {
        let zones = default_zones();
        let at_skills = DVec3::new(45.0, 1.5, 2.0);

        let idle = interaction(at_skills, &zones, false);
        assert_eq!(idle.active, Some(ZoneId::Skills));
        assert_eq!(idle.open_panel, None);

        let pressed = interaction(at_skills, &zones, true);
        assert_eq!(pressed.open_panel, Some(ZoneId::Skills));

        let outside = interaction(DVec3::new(25.0, 1.0, 25.0), &zones, true);
        assert_eq!(outside, Interaction::default());
    }
}
