//! Resource Descriptors
//!
//! The five REST collections the dashboard knows about, with the static
//! copy each view shows around its data.

use std::fmt;
use std::str::FromStr;

/// A collection exposed by the OctoFit backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Activities,
    Leaderboard,
    Teams,
    Users,
    Workouts,
}

impl Resource {
    /// All resources in navigation order
    pub const ALL: [Resource; 5] = [
        Resource::Activities,
        Resource::Leaderboard,
        Resource::Teams,
        Resource::Users,
        Resource::Workouts,
    ];

    /// Path segment under `/api/`
    pub fn segment(self) -> &'static str {
        match self {
            Resource::Activities => "activities",
            Resource::Leaderboard => "leaderboard",
            Resource::Teams => "teams",
            Resource::Users => "users",
            Resource::Workouts => "workouts",
        }
    }

    /// Dashboard route for this resource's page
    pub fn route(self) -> &'static str {
        match self {
            Resource::Activities => "/activities",
            Resource::Leaderboard => "/leaderboard",
            Resource::Teams => "/teams",
            Resource::Users => "/users",
            Resource::Workouts => "/workouts",
        }
    }

    /// Route of the server-rendered view fragment
    pub fn fragment_route(self) -> &'static str {
        match self {
            Resource::Activities => "/views/activities",
            Resource::Leaderboard => "/views/leaderboard",
            Resource::Teams => "/views/teams",
            Resource::Users => "/views/users",
            Resource::Workouts => "/views/workouts",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Resource::Activities => "Activities",
            Resource::Leaderboard => "Leaderboard",
            Resource::Teams => "Teams",
            Resource::Users => "Users",
            Resource::Workouts => "Workouts",
        }
    }

    /// Heading shown above a ready view
    pub fn heading(self) -> &'static str {
        match self {
            Resource::Workouts => "Recommended Workouts",
            other => other.title(),
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Resource::Activities => "Track and view all fitness activities",
            Resource::Leaderboard => "Top performers and their achievements",
            Resource::Teams => "Join a team and compete together",
            Resource::Users => "Community members and their profiles",
            Resource::Workouts => "Personalized workout suggestions for your fitness goals",
        }
    }

    /// Bootstrap icon class used in the page header
    pub fn header_icon(self) -> &'static str {
        match self {
            Resource::Activities => "bi-activity",
            Resource::Leaderboard => "bi-trophy",
            Resource::Teams => "bi-people",
            Resource::Users => "bi-person",
            Resource::Workouts => "bi-heart-pulse",
        }
    }

    /// Glyph prefixed to the navigation link
    pub fn nav_glyph(self) -> &'static str {
        match self {
            Resource::Activities => "📊",
            Resource::Leaderboard => "🏆",
            Resource::Teams => "👥",
            Resource::Users => "👤",
            Resource::Workouts => "💪",
        }
    }

    /// Label of the record-count badge
    pub fn count_label(self) -> &'static str {
        match self {
            Resource::Activities => "Total Activities",
            Resource::Leaderboard => "Total Competitors",
            Resource::Teams => "Total Teams",
            Resource::Users => "Total Users",
            Resource::Workouts => "Total Workouts",
        }
    }

    pub fn error_heading(self) -> String {
        format!("Error Loading {}", self.title())
    }

    /// Empty-state copy: (icon, title, hint)
    pub fn empty_state(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Resource::Activities => (
                "📊",
                "No activities found",
                "Start logging your fitness activities to see them here.",
            ),
            Resource::Leaderboard => (
                "🏆",
                "No leaderboard data available",
                "Complete activities to climb the ranks!",
            ),
            Resource::Teams => (
                "👥",
                "No teams found",
                "Create or join a team to start competing!",
            ),
            Resource::Users => (
                "👤",
                "No users found",
                "No user data available at the moment.",
            ),
            Resource::Workouts => (
                "💪",
                "No workouts available",
                "Check back later for personalized workout recommendations!",
            ),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Error returned when parsing an unknown resource name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown resource: {0} (expected one of activities, leaderboard, teams, users, workouts)")]
pub struct UnknownResource(pub String);

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_matches('/').to_lowercase();
        Resource::ALL
            .into_iter()
            .find(|r| r.segment() == wanted)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resource() {
        assert_eq!("teams".parse::<Resource>().unwrap(), Resource::Teams);
        assert_eq!("Workouts".parse::<Resource>().unwrap(), Resource::Workouts);
        assert_eq!("/leaderboard/".parse::<Resource>().unwrap(), Resource::Leaderboard);
        assert!("team".parse::<Resource>().is_err());
    }

    #[test]
    fn test_routes_match_segments() {
        for resource in Resource::ALL {
            assert_eq!(resource.route(), format!("/{}", resource.segment()));
            assert_eq!(
                resource.fragment_route(),
                format!("/views/{}", resource.segment())
            );
        }
    }

    #[test]
    fn test_error_heading() {
        assert_eq!(Resource::Users.error_heading(), "Error Loading Users");
    }
}
