//! BVH text parser.
//!
//! A BVH file has two sections: `HIERARCHY`, a nested joint tree where each
//! joint declares an offset and a channel list, and `MOTION`, a frame count,
//! a fixed frame time, and one line of channel values per frame.
//!
//! The reader's output contract is one rotation triple per joint per frame,
//! in joint-declaration order.  Position channels (present on the root of
//! most recordings) are parsed and skipped; a joint whose channel list does
//! not contain exactly three rotation channels is rejected as malformed.
//! Timestamps are derived as `i * frame_time` and values are kept at full
//! precision — rounding is the serializer's business.

use std::collections::HashSet;
use std::iter::Peekable;
use std::str::SplitWhitespace;

use mimic_types::{JointMap, MimicError, SourceFrame};

/// Parsed recording: joint names in declaration order, one frame per
/// sampled instant, and the fixed sampling interval in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionCapture {
    pub joint_names: Vec<String>,
    pub frames: Vec<SourceFrame>,
    pub frame_time: f64,
}

/// One channel of a joint's per-frame data block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    XPosition,
    YPosition,
    ZPosition,
    XRotation,
    YRotation,
    ZRotation,
}

impl Channel {
    fn parse(token: &str) -> Result<Self, MimicError> {
        match token {
            "Xposition" => Ok(Channel::XPosition),
            "Yposition" => Ok(Channel::YPosition),
            "Zposition" => Ok(Channel::ZPosition),
            "Xrotation" => Ok(Channel::XRotation),
            "Yrotation" => Ok(Channel::YRotation),
            "Zrotation" => Ok(Channel::ZRotation),
            other => Err(malformed(format!("unknown channel name {other:?}"))),
        }
    }

    fn is_rotation(self) -> bool {
        matches!(
            self,
            Channel::XRotation | Channel::YRotation | Channel::ZRotation
        )
    }
}

/// A joint as declared in the HIERARCHY section.
#[derive(Debug)]
struct JointDecl {
    name: String,
    channels: Vec<Channel>,
}

/// Whitespace token stream over the recording text.
struct Tokens<'a> {
    inner: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace().peekable(),
        }
    }

    fn next(&mut self) -> Result<&'a str, MimicError> {
        self.inner
            .next()
            .ok_or_else(|| malformed("unexpected end of input".to_string()))
    }

    fn expect(&mut self, want: &str) -> Result<(), MimicError> {
        let got = self.next()?;
        if got == want {
            Ok(())
        } else {
            Err(malformed(format!("expected {want:?}, found {got:?}")))
        }
    }

    fn next_f64(&mut self) -> Result<f64, MimicError> {
        let token = self.next()?;
        token
            .parse::<f64>()
            .map_err(|_| malformed(format!("expected a number, found {token:?}")))
    }

    fn next_usize(&mut self) -> Result<usize, MimicError> {
        let token = self.next()?;
        token
            .parse::<usize>()
            .map_err(|_| malformed(format!("expected a count, found {token:?}")))
    }
}

fn malformed(reason: String) -> MimicError {
    MimicError::MalformedSource(reason)
}

/// Parse raw BVH text into a [`MotionCapture`].
///
/// # Errors
///
/// [`MimicError::MalformedSource`] when the hierarchy cannot be parsed,
/// a joint lacks exactly 3 rotation channels, joint names collide, the
/// frame time is not positive, or the motion block's value count disagrees
/// with the declared channel and frame counts.
pub fn parse(text: &str) -> Result<MotionCapture, MimicError> {
    let mut tokens = Tokens::new(text);
    tokens.expect("HIERARCHY")?;
    tokens.expect("ROOT")?;

    let mut decls = Vec::new();
    parse_joint(&mut tokens, &mut decls)?;
    validate_decls(&decls)?;

    tokens.expect("MOTION")?;
    tokens.expect("Frames:")?;
    let frame_count = tokens.next_usize()?;
    tokens.expect("Frame")?;
    tokens.expect("Time:")?;
    let frame_time = tokens.next_f64()?;
    if !(frame_time > 0.0) {
        return Err(malformed(format!(
            "frame time must be positive, got {frame_time}"
        )));
    }

    // frame_count comes straight from the file; size nothing by it until
    // the motion block has been counted.
    let per_frame: usize = decls.iter().map(|d| d.channels.len()).sum();
    let expected = frame_count.checked_mul(per_frame).ok_or_else(|| {
        malformed(format!(
            "frame count {frame_count} x {per_frame} channels overflows"
        ))
    })?;
    let mut values = Vec::new();
    while tokens.inner.peek().is_some() {
        values.push(tokens.next_f64()?);
    }
    if values.len() != expected {
        return Err(malformed(format!(
            "motion block holds {} values, expected {} ({} frames x {} channels)",
            values.len(),
            expected,
            frame_count,
            per_frame
        )));
    }

    let mut frames = Vec::with_capacity(frame_count);
    for i in 0..frame_count {
        let mut cursor = i * per_frame;
        let mut rotations = JointMap::with_capacity(decls.len());
        for decl in &decls {
            let mut triple = [0.0f64; 3];
            let mut slot = 0;
            for channel in &decl.channels {
                if channel.is_rotation() {
                    triple[slot] = values[cursor];
                    slot += 1;
                }
                cursor += 1;
            }
            rotations.insert(decl.name.clone(), triple);
        }
        frames.push(SourceFrame {
            time: i as f64 * frame_time,
            rotations,
        });
    }

    Ok(MotionCapture {
        joint_names: decls.into_iter().map(|d| d.name).collect(),
        frames,
        frame_time,
    })
}

/// Parse one joint body.  The `ROOT`/`JOINT` keyword has already been
/// consumed; the next tokens are the joint name and its `{ ... }` block.
/// Joints are appended to `decls` in declaration order, parents before
/// children.
fn parse_joint(tokens: &mut Tokens<'_>, decls: &mut Vec<JointDecl>) -> Result<(), MimicError> {
    let name = tokens.next()?.to_string();
    tokens.expect("{")?;

    let index = decls.len();
    decls.push(JointDecl {
        name: name.clone(),
        channels: Vec::new(),
    });

    let mut channels = Vec::new();
    loop {
        match tokens.next()? {
            "OFFSET" => {
                tokens.next_f64()?;
                tokens.next_f64()?;
                tokens.next_f64()?;
            }
            "CHANNELS" => {
                let count = tokens.next_usize()?;
                for _ in 0..count {
                    channels.push(Channel::parse(tokens.next()?)?);
                }
            }
            "JOINT" => parse_joint(tokens, decls)?,
            "End" => parse_end_site(tokens, &name)?,
            "}" => break,
            other => {
                return Err(malformed(format!(
                    "unexpected token {other:?} inside joint {name:?}"
                )));
            }
        }
    }
    decls[index].channels = channels;
    Ok(())
}

/// Consume an `End Site { OFFSET x y z }` block.  End sites carry no
/// channels and are not joints.
fn parse_end_site(tokens: &mut Tokens<'_>, parent: &str) -> Result<(), MimicError> {
    let site = tokens.next()?;
    if !site.eq_ignore_ascii_case("Site") {
        return Err(malformed(format!(
            "expected \"Site\" after \"End\" in joint {parent:?}, found {site:?}"
        )));
    }
    tokens.expect("{")?;
    tokens.expect("OFFSET")?;
    tokens.next_f64()?;
    tokens.next_f64()?;
    tokens.next_f64()?;
    tokens.expect("}")?;
    Ok(())
}

fn validate_decls(decls: &[JointDecl]) -> Result<(), MimicError> {
    let mut seen = HashSet::new();
    for decl in decls {
        if !seen.insert(decl.name.as_str()) {
            return Err(malformed(format!("duplicate joint name {:?}", decl.name)));
        }
        let rotations = decl.channels.iter().filter(|c| c.is_rotation()).count();
        if rotations != 3 {
            return Err(malformed(format!(
                "joint {:?} declares {} rotation channels (expected 3)",
                decl.name, rotations
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_JOINT_BVH: &str = "\
HIERARCHY
ROOT Hips
{
    OFFSET 0.0 0.0 0.0
    CHANNELS 6 Xposition Yposition Zposition Zrotation Xrotation Yrotation
    JOINT Spine
    {
        OFFSET 0.0 5.0 0.0
        CHANNELS 3 Zrotation Xrotation Yrotation
        End Site
        {
            OFFSET 0.0 2.0 0.0
        }
    }
}
MOTION
Frames: 2
Frame Time: 0.0333
1.0 2.0 3.0 10.0 20.0 30.0 40.0 50.0 60.0
-1.0 -2.0 -3.0 11.0 21.0 31.0 41.0 51.0 61.0
";

    #[test]
    fn joint_names_follow_declaration_order() {
        let capture = parse(TWO_JOINT_BVH).unwrap();
        assert_eq!(
            capture.joint_names,
            vec!["Hips".to_string(), "Spine".to_string()]
        );
    }

    #[test]
    fn timestamps_are_index_times_frame_time() {
        let capture = parse(TWO_JOINT_BVH).unwrap();
        assert_eq!(capture.frame_time, 0.0333);
        assert_eq!(capture.frames.len(), 2);
        assert_eq!(capture.frames[0].time, 0.0);
        assert_eq!(capture.frames[1].time, 0.0333);
    }

    #[test]
    fn root_position_channels_are_skipped() {
        let capture = parse(TWO_JOINT_BVH).unwrap();
        let frame = &capture.frames[0];
        assert_eq!(frame.rotations.get("Hips"), Some(&[10.0, 20.0, 30.0]));
        assert_eq!(frame.rotations.get("Spine"), Some(&[40.0, 50.0, 60.0]));

        let frame = &capture.frames[1];
        assert_eq!(frame.rotations.get("Hips"), Some(&[11.0, 21.0, 31.0]));
        assert_eq!(frame.rotations.get("Spine"), Some(&[41.0, 51.0, 61.0]));
    }

    #[test]
    fn every_frame_names_exactly_the_declared_joints() {
        let capture = parse(TWO_JOINT_BVH).unwrap();
        for frame in &capture.frames {
            let names: Vec<&str> = frame.rotations.names().collect();
            assert_eq!(names, vec!["Hips", "Spine"]);
        }
    }

    #[test]
    fn missing_hierarchy_keyword_is_malformed() {
        let err = parse("MOTION\nFrames: 0\n").unwrap_err();
        assert!(matches!(err, MimicError::MalformedSource(_)));
        assert!(err.to_string().contains("HIERARCHY"));
    }

    #[test]
    fn wrong_rotation_channel_count_is_malformed() {
        let text = "\
HIERARCHY
ROOT Hips
{
    OFFSET 0.0 0.0 0.0
    CHANNELS 2 Zrotation Xrotation
}
MOTION
Frames: 1
Frame Time: 0.05
1.0 2.0
";
        let err = parse(text).unwrap_err();
        assert!(err.to_string().contains("2 rotation channels"));
    }

    #[test]
    fn value_count_mismatch_is_malformed() {
        let text = "\
HIERARCHY
ROOT Hips
{
    OFFSET 0.0 0.0 0.0
    CHANNELS 3 Zrotation Xrotation Yrotation
}
MOTION
Frames: 2
Frame Time: 0.05
1.0 2.0 3.0
";
        let err = parse(text).unwrap_err();
        assert!(err.to_string().contains("expected 6"));
    }

    #[test]
    fn absurd_frame_count_is_rejected_without_allocating() {
        let text = "\
HIERARCHY
ROOT Hips
{
    OFFSET 0.0 0.0 0.0
    CHANNELS 3 Zrotation Xrotation Yrotation
}
MOTION
Frames: 18446744073709551615
Frame Time: 0.05
1.0 2.0 3.0
";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, MimicError::MalformedSource(_)));
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn zero_frame_time_is_malformed() {
        let text = "\
HIERARCHY
ROOT Hips
{
    OFFSET 0.0 0.0 0.0
    CHANNELS 3 Zrotation Xrotation Yrotation
}
MOTION
Frames: 0
Frame Time: 0.0
";
        let err = parse(text).unwrap_err();
        assert!(err.to_string().contains("frame time"));
    }

    #[test]
    fn duplicate_joint_names_are_malformed() {
        let text = "\
HIERARCHY
ROOT Hips
{
    OFFSET 0.0 0.0 0.0
    CHANNELS 3 Zrotation Xrotation Yrotation
    JOINT Hips
    {
        OFFSET 0.0 1.0 0.0
        CHANNELS 3 Zrotation Xrotation Yrotation
        End Site
        {
            OFFSET 0.0 1.0 0.0
        }
    }
}
MOTION
Frames: 1
Frame Time: 0.05
1.0 2.0 3.0 4.0 5.0 6.0
";
        let err = parse(text).unwrap_err();
        assert!(err.to_string().contains("duplicate joint name"));
    }

    #[test]
    fn unknown_channel_name_is_malformed() {
        let text = "\
HIERARCHY
ROOT Hips
{
    OFFSET 0.0 0.0 0.0
    CHANNELS 3 Wrotation Xrotation Yrotation
}
MOTION
Frames: 0
Frame Time: 0.05
";
        let err = parse(text).unwrap_err();
        assert!(err.to_string().contains("unknown channel name"));
    }

    #[test]
    fn empty_motion_block_yields_no_frames() {
        let text = "\
HIERARCHY
ROOT Hips
{
    OFFSET 0.0 0.0 0.0
    CHANNELS 3 Zrotation Xrotation Yrotation
}
MOTION
Frames: 0
Frame Time: 0.05
";
        let capture = parse(text).unwrap();
        assert!(capture.frames.is_empty());
        assert_eq!(capture.joint_names.len(), 1);
    }
}
