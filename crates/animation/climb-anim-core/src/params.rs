//! Fixed parameter and state name tables.
//!
//! The animation graph addresses its parameters by string. Each table below
//! pins the names the character graph is authored with, in a stable order, so
//! the rest of the crate can talk in enums and only turn them into strings at
//! the [`AnimatorGraph`](crate::animator::AnimatorGraph) boundary.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;

macro_rules! name_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident : $table:literal {
            $($(#[$vmeta:meta])* $variant:ident => $name:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $vis enum $ty {
            $($(#[$vmeta])* $variant,)+
        }

        impl $ty {
            /// Every entry, in table order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant,)+];

            /// Name the animation graph uses for this entry.
            pub const fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }

            /// Position of this entry in the table.
            pub fn index(self) -> usize {
                self as usize
            }

            pub fn from_index(index: usize) -> Result<Self, ParamError> {
                Self::ALL
                    .get(index)
                    .copied()
                    .ok_or(ParamError::IndexOutOfRange {
                        table: $table,
                        index,
                        len: Self::ALL.len(),
                    })
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|p| p.name() == name)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

name_table! {
    /// One-shot transition triggers.
    pub enum TriggerParam : "trigger" {
        BracedHang => "BracedHangTrigger",
        BracedUnhang => "BracedHangUntrigger",
        BracedShimmyRight => "BracedShimmyRightTrigger",
        BracedShimmyLeft => "BracedShimmyLeftTrigger",
        FreeHang => "FreeHangTrigger",
        FreeUnhang => "FreeHangUntrigger",
        FreeShimmyRight => "FreeHangShimmyRight",
        FreeShimmyLeft => "FreeHangShimmyLeft",
        FallingIdle => "FallTrigger",
    }
}

name_table! {
    /// Boolean graph parameters.
    pub enum BoolParam : "bool" {
        IsGrounded => "isGrounded",
        IsCrouching => "isCrouching",
        IsJumping => "isJumping",
        IsClimbing => "isClimbing",
        IsStrafingRight => "isStrafingRight",
        IsStrafingLeft => "isStrafingLeft",
    }
}

name_table! {
    /// Float graph parameters.
    pub enum FloatParam : "float" {
        DistanceToGround => "distanceToGround",
        YVelocity => "yVelocity",
        ForwardSpeed => "forwardSpeed",
        /// 0 = idle, 1 = walking, 2 = jogging.
        IdleWalkBlend => "IdleWalkBlend",
        /// 0 = jump from stand, 1 = forward jump from a jog.
        JumpBlend => "JumpBlend",
    }
}

name_table! {
    /// Graph states the driver reacts to. Any other state is "unknown".
    pub enum GraphState : "state" {
        Standing => "Standing Blend Tree",
        Crouching => "Crouching Blend Tree",
        BracedHang => "Idle Braced Hang",
        FreeHang => "Idle Free Hang",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_keep_graph_order() {
        assert_eq!(TriggerParam::ALL.len(), 9);
        assert_eq!(BoolParam::ALL.len(), 6);
        assert_eq!(FloatParam::ALL.len(), 5);
        assert_eq!(GraphState::ALL.len(), 4);

        assert_eq!(TriggerParam::from_index(0).unwrap().name(), "BracedHangTrigger");
        assert_eq!(TriggerParam::from_index(8).unwrap(), TriggerParam::FallingIdle);
        assert_eq!(FloatParam::JumpBlend.index(), 4);
        assert_eq!(GraphState::FreeHang.index(), 3);
    }

    #[test]
    fn index_outside_table_is_rejected() {
        let err = BoolParam::from_index(6).unwrap_err();
        assert_eq!(
            err,
            ParamError::IndexOutOfRange {
                table: "bool",
                index: 6,
                len: 6
            }
        );
        assert!(GraphState::from_index(usize::MAX).is_err());
    }

    #[test]
    fn name_lookup_round_trips() {
        for t in TriggerParam::ALL {
            assert_eq!(TriggerParam::from_name(t.name()), Some(*t));
        }
        assert_eq!(GraphState::from_name("Idle Braced Hang"), Some(GraphState::BracedHang));
        assert_eq!(GraphState::from_name("idle braced hang"), None);
        assert_eq!(format!("{}", BoolParam::IsClimbing), "isClimbing");
    }
}
