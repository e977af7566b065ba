//! Frame update driver.
//!
//! [`CharacterAnimDriver`] maps the character's gameplay flags onto the
//! animation graph once per frame:
//!
//! 1. write the locomotion blends for the current speed tier,
//! 2. look up which known graph state is active and fire the hang / shimmy /
//!    fall triggers whose edge conditions hold,
//! 3. remember this frame's flags for next frame's edge detection.
//!
//! Plain parameters (grounded, crouching, speeds...) are written straight
//! through to the graph by their setters.

use crate::animator::AnimatorGraph;
use crate::blend::LocomotionBlend;
use crate::config::DriverConfig;
use crate::error::DriverResult;
use crate::hang::HangType;
use crate::inputs::FrameInputs;
use crate::outputs::FrameReport;
use crate::params::{BoolParam, FloatParam, GraphState, TriggerParam};

/// What the IK pass should do with the hands this frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IkPass {
    /// Not hanging; the hands follow the animation.
    Inactive,
    /// Character hangs from a ledge; hands should be pinned to the grip.
    HandsOnLedge { layer: usize },
}

/// Flags as of the end of the previous update.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LastFrame {
    pub hanging: bool,
    pub jumping: bool,
    pub shimmy_right: bool,
    pub shimmy_left: bool,
}

#[inline]
fn rising(was: bool, is: bool) -> bool {
    !was && is
}

/// Per-character animation driver over a host-owned [`AnimatorGraph`].
///
/// Graph-backed flags live in the animator; hanging, hang type, falling,
/// shimmy and speed are held here, along with the last-frame snapshot used
/// for edge detection. Call [`update`](Self::update) once per frame.
#[derive(Debug)]
pub struct CharacterAnimDriver<A: AnimatorGraph> {
    animator: A,
    cfg: DriverConfig,

    is_hanging: bool,
    hang_type: HangType,
    is_falling: bool,
    is_shimmy_right: bool,
    is_shimmy_left: bool,
    current_speed: f32,

    last: LastFrame,
}

impl<A: AnimatorGraph> CharacterAnimDriver<A> {
    pub fn new(animator: A, cfg: DriverConfig) -> Self {
        Self {
            animator,
            cfg,
            is_hanging: false,
            hang_type: HangType::default(),
            is_falling: false,
            is_shimmy_right: false,
            is_shimmy_left: false,
            current_speed: 0.0,
            last: LastFrame::default(),
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.cfg
    }

    pub fn set_config(&mut self, cfg: DriverConfig) {
        self.cfg = cfg;
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn into_animator(self) -> A {
        self.animator
    }

    pub fn last_frame(&self) -> LastFrame {
        self.last
    }

    // --- table-indexed access ------------------------------------------------

    /// Arm (`arm == true`) or reset the trigger at `index` in [`TriggerParam::ALL`].
    pub fn trigger(&mut self, index: usize, arm: bool) -> DriverResult<()> {
        let t = TriggerParam::from_index(index)?;
        if arm {
            self.fire(t)
        } else {
            self.reset(t)
        }
    }

    pub fn bool_at(&self, index: usize) -> DriverResult<bool> {
        let p = BoolParam::from_index(index)?;
        self.get_bool(p)
    }

    pub fn float_at(&self, index: usize) -> DriverResult<f32> {
        let p = FloatParam::from_index(index)?;
        self.get_float(p)
    }

    fn get_bool(&self, p: BoolParam) -> DriverResult<bool> {
        Ok(self.animator.get_bool(p.name())?)
    }

    fn set_bool(&mut self, p: BoolParam, v: bool) -> DriverResult<()> {
        Ok(self.animator.set_bool(p.name(), v)?)
    }

    fn get_float(&self, p: FloatParam) -> DriverResult<f32> {
        Ok(self.animator.get_float(p.name())?)
    }

    fn set_float(&mut self, p: FloatParam, v: f32) -> DriverResult<()> {
        Ok(self.animator.set_float(p.name(), v)?)
    }

    fn fire(&mut self, t: TriggerParam) -> DriverResult<()> {
        self.animator.set_trigger(t.name())?;
        if self.cfg.log_triggers {
            log::debug!("trigger {t}");
        }
        Ok(())
    }

    fn reset(&mut self, t: TriggerParam) -> DriverResult<()> {
        Ok(self.animator.reset_trigger(t.name())?)
    }

    // --- graph-backed flags ----------------------------------------------------

    pub fn is_grounded(&self) -> DriverResult<bool> {
        self.get_bool(BoolParam::IsGrounded)
    }

    pub fn set_grounded(&mut self, v: bool) -> DriverResult<()> {
        self.set_bool(BoolParam::IsGrounded, v)
    }

    pub fn is_crouching(&self) -> DriverResult<bool> {
        self.get_bool(BoolParam::IsCrouching)
    }

    pub fn set_crouching(&mut self, v: bool) -> DriverResult<()> {
        self.set_bool(BoolParam::IsCrouching, v)
    }

    pub fn is_jumping(&self) -> DriverResult<bool> {
        self.get_bool(BoolParam::IsJumping)
    }

    pub fn set_jumping(&mut self, v: bool) -> DriverResult<()> {
        self.set_bool(BoolParam::IsJumping, v)
    }

    pub fn is_strafing_right(&self) -> DriverResult<bool> {
        self.get_bool(BoolParam::IsStrafingRight)
    }

    pub fn set_strafing_right(&mut self, v: bool) -> DriverResult<()> {
        self.set_bool(BoolParam::IsStrafingRight, v)
    }

    pub fn is_strafing_left(&self) -> DriverResult<bool> {
        self.get_bool(BoolParam::IsStrafingLeft)
    }

    pub fn set_strafing_left(&mut self, v: bool) -> DriverResult<()> {
        self.set_bool(BoolParam::IsStrafingLeft, v)
    }

    pub fn is_climbing(&self) -> DriverResult<bool> {
        self.get_bool(BoolParam::IsClimbing)
    }

    /// Climbing animations carry their own displacement, so root motion is
    /// switched on when climbing starts and off when it ends.
    pub fn set_climbing(&mut self, v: bool) -> DriverResult<()> {
        let was = self.is_climbing()?;
        if !was && v {
            self.animator.set_apply_root_motion(true)?;
            log::debug!("root motion on (climb start)");
        } else if was && !v {
            self.animator.set_apply_root_motion(false)?;
            log::debug!("root motion off (climb end)");
        }
        self.set_bool(BoolParam::IsClimbing, v)
    }

    pub fn forward_speed(&self) -> DriverResult<f32> {
        self.get_float(FloatParam::ForwardSpeed)
    }

    pub fn set_forward_speed(&mut self, v: f32) -> DriverResult<()> {
        self.set_float(FloatParam::ForwardSpeed, v)
    }

    pub fn y_velocity(&self) -> DriverResult<f32> {
        self.get_float(FloatParam::YVelocity)
    }

    pub fn set_y_velocity(&mut self, v: f32) -> DriverResult<()> {
        self.set_float(FloatParam::YVelocity, v)
    }

    pub fn distance_to_ground(&self) -> DriverResult<f32> {
        self.get_float(FloatParam::DistanceToGround)
    }

    pub fn set_distance_to_ground(&mut self, v: f32) -> DriverResult<()> {
        self.set_float(FloatParam::DistanceToGround, v)
    }

    pub fn idle_walk_blend(&self) -> DriverResult<f32> {
        self.get_float(FloatParam::IdleWalkBlend)
    }

    pub fn jump_blend(&self) -> DriverResult<f32> {
        self.get_float(FloatParam::JumpBlend)
    }

    // --- driver-held flags -----------------------------------------------------

    pub fn is_falling(&self) -> bool {
        self.is_falling
    }

    /// Starting to fall arms `FallTrigger`; not falling disarms it.
    pub fn set_falling(&mut self, v: bool) -> DriverResult<()> {
        if !self.is_falling && v {
            self.fire(TriggerParam::FallingIdle)?;
        } else if !v {
            self.reset(TriggerParam::FallingIdle)?;
        }
        self.is_falling = v;
        Ok(())
    }

    pub fn is_hanging(&self) -> bool {
        self.is_hanging
    }

    pub fn set_hanging(&mut self, v: bool) {
        self.is_hanging = v;
    }

    pub fn hang_type(&self) -> HangType {
        self.hang_type
    }

    pub fn set_hang_type(&mut self, t: HangType) {
        self.hang_type = t;
    }

    pub fn is_shimmy_right(&self) -> bool {
        self.is_shimmy_right
    }

    /// Shimmy clips move the character themselves; root motion follows the
    /// flag, but stays on while the graph reports a climb.
    pub fn set_shimmy_right(&mut self, v: bool) -> DriverResult<()> {
        self.shimmy_root_motion(v)?;
        self.is_shimmy_right = v;
        Ok(())
    }

    pub fn is_shimmy_left(&self) -> bool {
        self.is_shimmy_left
    }

    pub fn set_shimmy_left(&mut self, v: bool) -> DriverResult<()> {
        self.shimmy_root_motion(v)?;
        self.is_shimmy_left = v;
        Ok(())
    }

    fn shimmy_root_motion(&mut self, v: bool) -> DriverResult<()> {
        let climbing = self.is_climbing()?;
        Ok(self.animator.set_apply_root_motion(v || climbing)?)
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    pub fn set_current_speed(&mut self, v: f32) {
        self.current_speed = v;
    }

    /// Push a frame's worth of gameplay flags through the setters.
    ///
    /// Falling and shimmy setters have side effects on triggers and root
    /// motion, so they are only invoked when the flag actually changes.
    /// Climbing is applied last so a climb starting this frame owns root
    /// motion even when a shimmy ends in the same frame.
    pub fn apply_inputs(&mut self, inputs: &FrameInputs) -> DriverResult<()> {
        self.set_grounded(inputs.is_grounded)?;
        self.set_crouching(inputs.is_crouching)?;
        self.set_jumping(inputs.is_jumping)?;
        self.set_strafing_right(inputs.is_strafing_right)?;
        self.set_strafing_left(inputs.is_strafing_left)?;
        self.set_forward_speed(inputs.forward_speed)?;
        self.set_y_velocity(inputs.y_velocity)?;
        self.set_distance_to_ground(inputs.distance_to_ground)?;

        if inputs.is_falling != self.is_falling {
            self.set_falling(inputs.is_falling)?;
        }
        if inputs.is_shimmy_right != self.is_shimmy_right {
            self.set_shimmy_right(inputs.is_shimmy_right)?;
        }
        if inputs.is_shimmy_left != self.is_shimmy_left {
            self.set_shimmy_left(inputs.is_shimmy_left)?;
        }
        self.set_climbing(inputs.is_climbing)?;

        self.set_hanging(inputs.is_hanging);
        self.set_hang_type(inputs.hang_type);
        self.set_current_speed(inputs.current_speed);
        Ok(())
    }

    // --- per-frame update --------------------------------------------------------

    /// First known state (in table order) active on the configured layer.
    pub fn current_state(&self) -> DriverResult<Option<GraphState>> {
        for state in GraphState::ALL {
            if self.animator.is_in_state(self.cfg.layer, state.name())? {
                return Ok(Some(*state));
            }
        }
        Ok(None)
    }

    pub fn is_in_state(&self, state: GraphState) -> DriverResult<bool> {
        Ok(self.animator.is_in_state(self.cfg.layer, state.name())?)
    }

    /// Run one frame: blends, state-driven triggers, last-frame snapshot.
    ///
    /// The snapshot is taken even when firing a trigger fails, so triggers
    /// armed before the failure are not fired again next frame.
    pub fn update(&mut self) -> DriverResult<FrameReport> {
        let blend = self.set_blends()?;
        let mut report = FrameReport {
            blend,
            ..FrameReport::default()
        };
        let cases = self.process_state_cases(&mut report);
        let snapshot = self.snapshot_last_frame();
        cases?;
        snapshot?;
        Ok(report)
    }

    fn set_blends(&mut self) -> DriverResult<LocomotionBlend> {
        let blend = LocomotionBlend::from_speed(
            self.current_speed,
            self.cfg.walk_speed,
            self.cfg.jog_speed,
        );
        self.set_float(FloatParam::IdleWalkBlend, blend.idle_walk)?;
        self.set_float(FloatParam::JumpBlend, blend.jump)?;
        Ok(blend)
    }

    fn process_state_cases(&mut self, report: &mut FrameReport) -> DriverResult<()> {
        let state = self.current_state()?;
        report.state = state;
        let mut fired = Vec::new();
        let hang = self.hang_type;
        let shimmy_right = rising(self.last.shimmy_right, self.is_shimmy_right);
        let shimmy_left = rising(self.last.shimmy_left, self.is_shimmy_left);

        match state {
            Some(GraphState::Standing) => {
                if rising(self.last.hanging, self.is_hanging) {
                    let t = hang.select(TriggerParam::BracedHang, TriggerParam::FreeHang);
                    self.fire(t)?;
                    fired.push(t);
                }
            }
            Some(GraphState::BracedHang) => {
                // a free grip while in the braced idle re-enters the free hang
                if shimmy_right {
                    let t = hang.select(TriggerParam::BracedShimmyRight, TriggerParam::FreeHang);
                    self.fire(t)?;
                    fired.push(t);
                }
                if shimmy_left {
                    let t = hang.select(TriggerParam::BracedShimmyLeft, TriggerParam::FreeHang);
                    self.fire(t)?;
                    fired.push(t);
                }
            }
            Some(GraphState::FreeHang) => {
                if self.last.hanging && !self.is_hanging {
                    self.fire(TriggerParam::FallingIdle)?;
                    fired.push(TriggerParam::FallingIdle);
                }
                // a braced grip while in the free idle re-enters the braced hang
                if shimmy_right {
                    let t = hang.select(TriggerParam::BracedHang, TriggerParam::FreeShimmyRight);
                    self.fire(t)?;
                    fired.push(t);
                }
                if shimmy_left {
                    let t = hang.select(TriggerParam::BracedHang, TriggerParam::FreeShimmyLeft);
                    self.fire(t)?;
                    fired.push(t);
                }
            }
            Some(GraphState::Crouching) | None => {}
        }
        report.fired = fired;
        Ok(())
    }

    fn snapshot_last_frame(&mut self) -> DriverResult<()> {
        self.last = LastFrame {
            hanging: self.is_hanging,
            jumping: self.is_jumping()?,
            shimmy_right: self.is_shimmy_right,
            shimmy_left: self.is_shimmy_left,
        };
        Ok(())
    }

    /// IK callback hook, invoked by the host during its IK pass.
    pub fn ik_pass(&self, layer: usize) -> IkPass {
        if self.is_hanging {
            IkPass::HandsOnLedge { layer }
        } else {
            IkPass::Inactive
        }
    }
}

impl<A: AnimatorGraph + Default> Default for CharacterAnimDriver<A> {
    fn default() -> Self {
        Self::new(A::default(), DriverConfig::default())
    }
}
