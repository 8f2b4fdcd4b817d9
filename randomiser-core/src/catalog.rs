//! Static content tables: every check and every item the game can ever
//! expose, independent of which options a slot enables.
//!
//! Ids are `BASE_ID + offset`. Offsets are grouped in stable ranges per
//! category so that layouts generated against an older table still decode.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::regions::Area;
use crate::{RandomiserError, Result};

pub const BASE_ID: u64 = 119_000_000;

pub const GARDEN_ACCESS: &str = "Garden Access";
pub const HIGH_STREET_ACCESS: &str = "High Street Access";
pub const BACK_GARDENS_ACCESS: &str = "Back Gardens Access";
pub const PUB_ACCESS: &str = "Pub Access";
pub const MODEL_VILLAGE_ACCESS: &str = "Model Village Access";

pub const GOLDEN_BELL: &str = "Golden Bell";
pub const GOLDEN_BELL_SOUL: &str = "Golden Bell Soul";

pub const SILENT_STEPS: &str = "Silent Steps";
pub const MEGA_HONK: &str = "Mega Honk";
pub const SPEEDY_FEET: &str = "Speedy Feet";
pub const A_GOOSE_DAY: &str = "A Goose Day";
pub const COIN: &str = "Coin";
pub const TIRED_GOOSE: &str = "Tired Goose";
pub const CONFUSED_FEET: &str = "Confused Feet";
pub const BUTTERBEAK: &str = "Butterbeak";
pub const SUSPICIOUS_GOOSE: &str = "Suspicious Goose";

/// Location the Golden Bell is always locked to.
pub const PICK_UP_GOLDEN_BELL: &str = "Pick up Golden Bell";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationCategory {
    CoreGoal,
    ExtraGoal,
    SpeedrunGoal,
    /// Registered so hosts can decode it, never activated.
    Completion,
    MilestoneMain,
    MilestoneExtra,
    MilestoneSpeedrun,
    MilestoneAllTasks,
    GoalVariant,
    ItemPickup,
    UniquePickup,
    DragItem,
    UniqueDrag,
    Interaction,
    AdditionalGoal,
    PeckFirst,
    PeckFull,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LocationData {
    pub offset: u32,
    pub name: &'static str,
    pub area: Area,
    pub category: LocationCategory,
}

impl LocationData {
    pub fn id(&self) -> u64 {
        BASE_ID + u64::from(self.offset)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemClassification {
    Progression,
    Useful,
    Filler,
    Trap,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemGroup {
    AreaAccess,
    /// Alternative unlock scheme; registered but never placed.
    Progressive,
    Filler,
    Trap,
    NpcSoul,
    PropSoul,
    Victory,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ItemData {
    pub offset: u32,
    pub name: &'static str,
    pub classification: ItemClassification,
    pub group: ItemGroup,
}

impl ItemData {
    pub fn id(&self) -> u64 {
        BASE_ID + u64::from(self.offset)
    }
}

const fn loc(offset: u32, name: &'static str, area: Area, category: LocationCategory) -> LocationData {
    LocationData {
        offset,
        name,
        area,
        category,
    }
}

const fn item(
    offset: u32,
    name: &'static str,
    classification: ItemClassification,
    group: ItemGroup,
) -> ItemData {
    ItemData {
        offset,
        name,
        classification,
        group,
    }
}

use Area as A;
use ItemClassification as K;
use ItemGroup as I;
use LocationCategory as C;

pub const LOCATIONS: &[LocationData] = &[
    loc(1, "Get into the Garden", A::Garden, C::CoreGoal),
    loc(2, "Get the Groundskeeper Wet", A::Garden, C::CoreGoal),
    loc(3, "Steal the Groundskeeper's Keys", A::Garden, C::CoreGoal),
    loc(4, "Make the Groundskeeper Wear His Sun Hat", A::Garden, C::CoreGoal),
    loc(5, "Rake in the Lake", A::Garden, C::CoreGoal),
    loc(6, "Have a Picnic", A::Garden, C::CoreGoal),
    loc(7, "Make the Groundskeeper Hammer His Thumb", A::Garden, C::CoreGoal),
    loc(10, "Break the Broom", A::HighStreet, C::CoreGoal),
    loc(11, "Trap the Boy in the Phone Booth", A::HighStreet, C::CoreGoal),
    loc(12, "Make the Boy Wear the Wrong Glasses", A::HighStreet, C::CoreGoal),
    loc(13, "Make Someone Buy Back Their Own Stuff", A::HighStreet, C::CoreGoal),
    loc(14, "Get on TV", A::HighStreet, C::CoreGoal),
    loc(15, "Go Shopping", A::HighStreet, C::CoreGoal),
    loc(16, "Trap the Shopkeeper in the Garage", A::HighStreet, C::CoreGoal),
    loc(20, "Make Someone Break the Fancy Vase", A::BackGardens, C::CoreGoal),
    loc(21, "Help the Woman Dress Up the Bust", A::BackGardens, C::CoreGoal),
    loc(22, "Make the Man Spit Out His Tea", A::BackGardens, C::CoreGoal),
    loc(23, "Get Dressed Up with a Ribbon", A::BackGardens, C::CoreGoal),
    loc(24, "Make the Man Go Barefoot", A::BackGardens, C::CoreGoal),
    loc(25, "Do the Washing", A::BackGardens, C::CoreGoal),
    loc(26, "Make Someone Prune the Prize Rose", A::BackGardens, C::CoreGoal),
    loc(30, "Get into the Pub", A::Pub, C::CoreGoal),
    loc(31, "Break the Dartboard", A::Pub, C::CoreGoal),
    loc(32, "Get the Toy Boat", A::Pub, C::CoreGoal),
    loc(33, "Make the Old Man Fall on His Bum", A::Pub, C::CoreGoal),
    loc(34, "Be Awarded a Flower", A::Pub, C::CoreGoal),
    loc(35, "Steal a Pint Glass and Drop It in the Canal", A::Pub, C::CoreGoal),
    loc(36, "Set the Table", A::Pub, C::CoreGoal),
    loc(37, "Drop a Bucket on the Burly Man's Head", A::Pub, C::CoreGoal),
    loc(40, "Get into the Model Village", A::ModelVillage, C::CoreGoal),
    loc(41, "Steal the Beautiful Miniature Golden Bell", A::ModelVillage, C::CoreGoal),
    loc(42, "...And Take It All the Way Home", A::ModelVillage, C::CoreGoal),
    loc(1143, "Pick up Golden Bell", A::ModelVillage, C::CoreGoal),

    loc(50, "Lock the Groundskeeper Out of the Garden", A::Garden, C::ExtraGoal),
    loc(51, "Cabbage Picnic", A::Garden, C::ExtraGoal),
    loc(52, "Trip the Boy in the Puddle", A::HighStreet, C::ExtraGoal),
    loc(53, "Make the Scales Go Ding", A::HighStreet, C::ExtraGoal),
    loc(54, "Open an Umbrella Inside the TV Shop", A::HighStreet, C::ExtraGoal),
    loc(55, "Make Someone from Outside the High Street Buy Back Their Own Stuff", A::HighStreet, C::ExtraGoal),
    loc(56, "Collect the Five Flowers", A::Hub, C::ExtraGoal),
    loc(60, "Trap the Boy in the Garage", A::HighStreet, C::ExtraGoal),
    loc(61, "Catch an Object as It's Thrown Over the Fence", A::BackGardens, C::ExtraGoal),
    loc(62, "Get Thrown Over the Fence", A::BackGardens, C::ExtraGoal),
    loc(63, "Dress Up the Bust with Things from Outside the Back Gardens", A::BackGardens, C::ExtraGoal),
    loc(64, "Score a Goal", A::BackGardens, C::ExtraGoal),
    loc(65, "Sail the Toy Boat Under a Bridge", A::Pub, C::ExtraGoal),
    loc(66, "Perform at the Pub Wearing a Ribbon", A::Pub, C::ExtraGoal),
    loc(67, "Steal the Old Man's Woollen Hat", A::Pub, C::ExtraGoal),

    loc(70, "Complete the Garden Before Noon", A::Garden, C::SpeedrunGoal),
    loc(71, "Complete the High Street Before Noon", A::HighStreet, C::SpeedrunGoal),
    loc(72, "Complete the Back Gardens Before Noon", A::BackGardens, C::SpeedrunGoal),
    loc(73, "Complete the Pub Before Noon", A::Pub, C::SpeedrunGoal),

    loc(80, "100% Completion", A::ModelVillage, C::Completion),

    loc(81, "All Garden Tasks Complete", A::Garden, C::MilestoneMain),
    loc(82, "All High Street Tasks Complete", A::HighStreet, C::MilestoneMain),
    loc(83, "All Back Gardens Tasks Complete", A::BackGardens, C::MilestoneMain),
    loc(84, "All Pub Tasks Complete", A::Pub, C::MilestoneMain),

    loc(85, "All To Do (As Well) Tasks Complete", A::Hub, C::MilestoneExtra),

    loc(86, "All Speedrun Tasks Complete", A::Hub, C::MilestoneSpeedrun),

    loc(87, "All Speedrun Tasks Complete (Golden Bell Soul)", A::Hub, C::GoalVariant),

    loc(88, "All Main Task Lists Complete", A::Hub, C::MilestoneMain),

    loc(89, "All Main Task Lists Complete (Golden Bell Soul)", A::Hub, C::GoalVariant),

    loc(90, "All Tasks Complete", A::Hub, C::MilestoneAllTasks),

    loc(91, "All Tasks Complete (Golden Bell Soul)", A::Hub, C::GoalVariant),
    loc(92, "All Main Task Lists + To Do (As Well) Complete (Golden Bell Soul)", A::Hub, C::GoalVariant),
    loc(93, "Get into the Model Village (Golden Bell Soul)", A::ModelVillage, C::GoalVariant),
    loc(94, "Complete the Four Final Area Tasks (Golden Bell Soul)", A::Hub, C::GoalVariant),

    loc(1002, "Pick up Radio", A::Garden, C::ItemPickup),
    loc(1003, "Pick up Trowel", A::Garden, C::ItemPickup),
    loc(1004, "Pick up Keys", A::Garden, C::ItemPickup),
    loc(1006, "Pick up Tulip", A::Garden, C::ItemPickup),
    loc(1007, "Pick up Apple (1)", A::Garden, C::ItemPickup),
    loc(1008, "Pick up Jam", A::Garden, C::ItemPickup),
    loc(1009, "Pick up Picnic Mug", A::Garden, C::ItemPickup),
    loc(1010, "Pick up Thermos", A::Garden, C::ItemPickup),
    loc(1011, "Pick up Sandwich (Right)", A::Garden, C::ItemPickup),
    loc(1012, "Pick up Sandwich (Left)", A::Garden, C::ItemPickup),
    loc(1014, "Pick up Straw Hat", A::Garden, C::ItemPickup),
    loc(1015, "Pick up Drink Can", A::Hub, C::ItemPickup),
    loc(1016, "Pick up Tennis Ball", A::Hub, C::ItemPickup),
    loc(1017, "Pick up Groundskeeper's Hat", A::Garden, C::ItemPickup),
    loc(1018, "Pick up Apple (2)", A::Garden, C::ItemPickup),
    loc(1021, "Pick up Boy's Glasses", A::HighStreet, C::ItemPickup),
    loc(1022, "Pick up Horn-Rimmed Glasses", A::HighStreet, C::ItemPickup),
    loc(1023, "Pick up Red Glasses", A::HighStreet, C::ItemPickup),
    loc(1024, "Pick up Sunglasses", A::HighStreet, C::ItemPickup),
    loc(1025, "Pick up Loo Paper", A::HighStreet, C::ItemPickup),
    loc(1026, "Pick up Toy Car", A::HighStreet, C::ItemPickup),
    loc(1027, "Pick up Hairbrush", A::HighStreet, C::ItemPickup),
    loc(1028, "Pick up Toothbrush", A::HighStreet, C::ItemPickup),
    loc(1029, "Pick up Stereoscope", A::HighStreet, C::ItemPickup),
    loc(1030, "Pick up Dish Soap Bottle", A::HighStreet, C::ItemPickup),
    loc(1031, "Pick up Tinned Food (Blue)", A::HighStreet, C::ItemPickup),
    loc(1032, "Pick up Tinned Food (Yellow)", A::HighStreet, C::ItemPickup),
    loc(1033, "Pick up Tinned Food (Orange)", A::HighStreet, C::ItemPickup),
    loc(1034, "Pick up Weed Tool", A::HighStreet, C::ItemPickup),
    loc(1035, "Pick up Lily Flower", A::HighStreet, C::ItemPickup),
    loc(1036, "Pick up Orange (1)", A::HighStreet, C::ItemPickup),
    loc(1037, "Pick up Shop Tomato (1)", A::HighStreet, C::ItemPickup),
    loc(1038, "Pick up Shop Carrot (1)", A::HighStreet, C::ItemPickup),
    loc(1039, "Pick up Cucumber (1)", A::HighStreet, C::ItemPickup),
    loc(1040, "Pick up Leek (1)", A::HighStreet, C::ItemPickup),
    loc(1041, "Pick up Toy Plane", A::HighStreet, C::ItemPickup),
    loc(1042, "Pick up Pint Bottle (1)", A::Hub, C::ItemPickup),
    loc(1043, "Pick up Spray Bottle", A::HighStreet, C::ItemPickup),
    loc(1044, "Pick up Walkie Talkie (2)", A::HighStreet, C::ItemPickup),
    loc(1045, "Pick up Walkie Talkie (1)", A::HighStreet, C::ItemPickup),
    loc(1046, "Pick up Apple Core (1)", A::HighStreet, C::ItemPickup),
    loc(1058, "Pick up Apple Core (2)", A::HighStreet, C::ItemPickup),
    loc(1047, "Pick up Dustbin Lid", A::HighStreet, C::ItemPickup),
    loc(1048, "Pick up Pint Bottle (2)", A::HighStreet, C::ItemPickup),
    loc(1049, "Pick up Pint Bottle (3)", A::HighStreet, C::ItemPickup),
    loc(1050, "Pick up Chalk", A::HighStreet, C::ItemPickup),
    loc(1051, "Pick up Shop Tomato (2)", A::HighStreet, C::ItemPickup),
    loc(1052, "Pick up Orange (2)", A::HighStreet, C::ItemPickup),
    loc(1053, "Pick up Orange (3)", A::HighStreet, C::ItemPickup),
    loc(1054, "Pick up Shop Carrot (2)", A::HighStreet, C::ItemPickup),
    loc(1055, "Pick up Cucumber (2)", A::HighStreet, C::ItemPickup),
    loc(1056, "Pick up Leek (2)", A::HighStreet, C::ItemPickup),
    loc(1057, "Pick up Shop Carrot (3)", A::HighStreet, C::ItemPickup),
    loc(1059, "Pick up Leek (3)", A::HighStreet, C::ItemPickup),
    loc(1060, "Pick up Shop Tomato (3)", A::HighStreet, C::ItemPickup),
    loc(1061, "Pick up Cucumber (3)", A::HighStreet, C::ItemPickup),
    loc(1062, "Pick up Garden Fork", A::HighStreet, C::ItemPickup),
    loc(1071, "Pick up Blue Ribbon", A::Hub, C::ItemPickup),
    loc(1072, "Pick up Dummy", A::Hub, C::ItemPickup),
    loc(1073, "Pick up Cricket Ball", A::BackGardens, C::ItemPickup),
    loc(1074, "Pick up Bust Pipe", A::BackGardens, C::ItemPickup),
    loc(1075, "Pick up Bust Hat", A::BackGardens, C::ItemPickup),
    loc(1076, "Pick up Bust Glasses", A::BackGardens, C::ItemPickup),
    loc(1077, "Pick up Slipper (Right)", A::BackGardens, C::ItemPickup),
    loc(1078, "Pick up Slipper (Left)", A::BackGardens, C::ItemPickup),
    loc(1079, "Pick up Tea Cup", A::BackGardens, C::ItemPickup),
    loc(1080, "Pick up Newspaper", A::BackGardens, C::ItemPickup),
    loc(1081, "Pick up Sock (1)", A::BackGardens, C::ItemPickup),
    loc(1082, "Pick up Sock (2)", A::BackGardens, C::ItemPickup),
    loc(1083, "Pick up Vase", A::BackGardens, C::ItemPickup),
    loc(1084, "Pick up Red Ribbon", A::BackGardens, C::ItemPickup),
    loc(1085, "Pick up Pot Stack", A::BackGardens, C::ItemPickup),
    loc(1086, "Pick up Soap", A::BackGardens, C::ItemPickup),
    loc(1087, "Pick up Paintbrush", A::BackGardens, C::ItemPickup),
    loc(1088, "Pick up Vase Piece (1)", A::BackGardens, C::ItemPickup),
    loc(1089, "Pick up Vase Piece (2)", A::BackGardens, C::ItemPickup),
    loc(1090, "Pick up Bra", A::BackGardens, C::ItemPickup),
    loc(1093, "Pick up Badminton Racket", A::BackGardens, C::ItemPickup),
    loc(1094, "Pick up Rose", A::BackGardens, C::ItemPickup),
    loc(1101, "Pick up Fishing Bobber", A::Hub, C::ItemPickup),
    loc(1102, "Pick up Letter", A::Pub, C::ItemPickup),
    loc(1104, "Pick up Plate (1)", A::Pub, C::ItemPickup),
    loc(1105, "Pick up Plate (2)", A::Pub, C::ItemPickup),
    loc(1106, "Pick up Plate (3)", A::Pub, C::ItemPickup),
    loc(1107, "Pick up Green Quoit (1)", A::Pub, C::ItemPickup),
    loc(1108, "Pick up Red Quoit (1)", A::Pub, C::ItemPickup),
    loc(1109, "Pick up Fork (1)", A::Pub, C::ItemPickup),
    loc(1110, "Pick up Fork (2)", A::Pub, C::ItemPickup),
    loc(1111, "Pick up Knife (1)", A::Pub, C::ItemPickup),
    loc(1112, "Pick up Knife (2)", A::Pub, C::ItemPickup),
    loc(1113, "Pick up Cork", A::Pub, C::ItemPickup),
    loc(1114, "Pick up Candlestick", A::Pub, C::ItemPickup),
    loc(1115, "Pick up Flower for Vase", A::Pub, C::ItemPickup),
    loc(1116, "Pick up Dart (1)", A::Pub, C::ItemPickup),
    loc(1117, "Pick up Dart (2)", A::Pub, C::ItemPickup),
    loc(1118, "Pick up Dart (3)", A::Pub, C::ItemPickup),
    loc(1119, "Pick up Harmonica", A::Pub, C::ItemPickup),
    loc(1120, "Pick up Pint Glass", A::Pub, C::ItemPickup),
    loc(1121, "Pick up Toy Boat", A::Pub, C::ItemPickup),
    loc(1122, "Pick up Old Man's Woollen Hat", A::Pub, C::ItemPickup),
    loc(1123, "Pick up Pepper Grinder", A::Pub, C::ItemPickup),
    loc(1124, "Pick up Pub Woman's Cloth", A::Pub, C::ItemPickup),
    loc(1125, "Pick up Green Quoit (2)", A::Pub, C::ItemPickup),
    loc(1126, "Pick up Green Quoit (3)", A::Pub, C::ItemPickup),
    loc(1127, "Pick up Red Quoit (2)", A::Pub, C::ItemPickup),
    loc(1128, "Pick up Red Quoit (3)", A::Pub, C::ItemPickup),
    loc(1131, "Pick up Mini Person (Child)", A::ModelVillage, C::ItemPickup),
    loc(1132, "Pick up Mini Person (Jumpsuit)", A::ModelVillage, C::ItemPickup),
    loc(1133, "Pick up Mini Person (Gardener)", A::ModelVillage, C::ItemPickup),
    loc(1134, "Pick up Mini Shovel", A::ModelVillage, C::ItemPickup),
    loc(1135, "Pick up Poppy Flower", A::ModelVillage, C::ItemPickup),
    loc(1136, "Pick up Mini Person (Old Woman)", A::ModelVillage, C::ItemPickup),
    loc(1137, "Pick up Mini Phone Door", A::ModelVillage, C::ItemPickup),
    loc(1138, "Pick up Mini Mail Pillar", A::ModelVillage, C::ItemPickup),
    loc(1139, "Pick up Mini Person (Postie)", A::ModelVillage, C::ItemPickup),
    loc(1140, "Pick up Mini Person (Vest Man)", A::ModelVillage, C::ItemPickup),
    loc(1141, "Pick up Mini Person", A::ModelVillage, C::ItemPickup),
    loc(1144, "Pick up Mini Goose", A::ModelVillage, C::ItemPickup),
    loc(1142, "Pick up Timber Handle", A::ModelVillage, C::ItemPickup),

    loc(1201, "Drag Rake", A::Garden, C::DragItem),
    loc(1202, "Drag Picnic Basket", A::Garden, C::DragItem),
    loc(1203, "Drag Esky", A::Garden, C::DragItem),
    loc(1205, "Drag Shovel", A::Garden, C::DragItem),
    loc(1206, "Drag Pumpkin (1)", A::Garden, C::DragItem),
    loc(1207, "Drag Pumpkin (2)", A::Garden, C::DragItem),
    loc(1208, "Drag Pumpkin (3)", A::Garden, C::DragItem),
    loc(1209, "Drag Pumpkin (4)", A::Garden, C::DragItem),
    loc(1210, "Drag Watering Can", A::Garden, C::DragItem),
    loc(1211, "Drag Gumboot (1)", A::Garden, C::DragItem),
    loc(1212, "Drag Gumboot (2)", A::Garden, C::DragItem),
    loc(1213, "Drag No Goose Sign (Garden)", A::Garden, C::DragItem),
    loc(1214, "Drag Wooden Crate", A::Garden, C::DragItem),
    loc(1215, "Drag Fence Bolt", A::Hub, C::DragItem),
    loc(1216, "Drag Mallet", A::Garden, C::DragItem),
    loc(1220, "Drag Shopping Basket", A::HighStreet, C::DragItem),
    loc(1221, "Drag Umbrella (Black)", A::HighStreet, C::DragItem),
    loc(1222, "Drag Push Broom", A::HighStreet, C::DragItem),
    loc(1223, "Drag Broken Broom Head", A::HighStreet, C::DragItem),
    loc(1224, "Drag Dustbin", A::HighStreet, C::DragItem),
    loc(1225, "Drag Baby Doll", A::HighStreet, C::DragItem),
    loc(1226, "Drag Pricing Gun", A::HighStreet, C::DragItem),
    loc(1227, "Drag Adding Machine", A::HighStreet, C::DragItem),
    loc(1228, "Drag Umbrella (Rainbow)", A::HighStreet, C::DragItem),
    loc(1229, "Drag Umbrella (Red)", A::HighStreet, C::DragItem),
    loc(1240, "Drag Rose Box", A::BackGardens, C::DragItem),
    loc(1241, "Drag Cricket Bat", A::BackGardens, C::DragItem),
    loc(1242, "Drag Tea Pot", A::BackGardens, C::DragItem),
    loc(1243, "Drag Clippers", A::BackGardens, C::DragItem),
    loc(1244, "Drag Duck Statue", A::BackGardens, C::DragItem),
    loc(1245, "Drag Frog Statue", A::BackGardens, C::DragItem),
    loc(1246, "Drag Jeremy Fish", A::BackGardens, C::DragItem),
    loc(1247, "Drag No Goose Sign (Messy)", A::BackGardens, C::DragItem),
    loc(1248, "Drag Drawer", A::BackGardens, C::DragItem),
    loc(1249, "Drag Enamel Jug", A::BackGardens, C::DragItem),
    loc(1250, "Drag No Goose Sign (Clean)", A::BackGardens, C::DragItem),
    loc(1270, "Drag Tackle Box", A::Hub, C::DragItem),
    loc(1271, "Drag Traffic Cone", A::Pub, C::DragItem),
    loc(1272, "Drag Parcel", A::Pub, C::DragItem),
    loc(1273, "Drag Stealth Box", A::Pub, C::DragItem),
    loc(1274, "Drag No Goose Sign (Pub)", A::Pub, C::DragItem),
    loc(1275, "Drag Portable Stool", A::Pub, C::DragItem),
    loc(1276, "Drag Dartboard", A::Pub, C::DragItem),
    loc(1277, "Drag Mop Bucket", A::Pub, C::DragItem),
    loc(1278, "Drag Mop", A::Pub, C::DragItem),
    loc(1279, "Drag Delivery Box", A::Pub, C::DragItem),
    loc(1280, "Drag Bucket", A::Pub, C::DragItem),
    loc(1290, "Drag Mini Bench", A::ModelVillage, C::DragItem),
    loc(1291, "Drag Mini Pump", A::ModelVillage, C::DragItem),
    loc(1292, "Drag Mini Street Bench", A::ModelVillage, C::DragItem),
    loc(1293, "Drag Mini Birdbath", A::ModelVillage, C::DragItem),
    loc(1294, "Drag Mini Easel", A::ModelVillage, C::DragItem),
    loc(1295, "Drag Mini Sun Lounge", A::ModelVillage, C::DragItem),

    loc(1301, "Ring the Bike Bell", A::Hub, C::Interaction),
    loc(1302, "Turn on the Garden Tap", A::Garden, C::Interaction),
    loc(1303, "Turn on the Sprinkler", A::Garden, C::Interaction),
    loc(1311, "Unplug the Radio", A::HighStreet, C::Interaction),
    loc(1313, "Open the Black Umbrella", A::HighStreet, C::Interaction),
    loc(1314, "Open the Rainbow Umbrella", A::HighStreet, C::Interaction),
    loc(1315, "Open the Red Umbrella", A::HighStreet, C::Interaction),
    loc(1316, "Untie the Boy's Left Laces", A::HighStreet, C::Interaction),
    loc(1317, "Untie the Boy's Right Laces", A::HighStreet, C::Interaction),
    loc(1318, "Kick the Football", A::HighStreet, C::Interaction),
    loc(1320, "Ring the Doorbell", A::BackGardens, C::Interaction),
    loc(1322, "Spin the Windmill", A::BackGardens, C::Interaction),
    loc(1323, "Peck the Purple Flower", A::BackGardens, C::Interaction),
    loc(1324, "Shake the Trellis", A::BackGardens, C::Interaction),
    loc(1325, "Peck the Sunflower", A::BackGardens, C::Interaction),
    loc(1326, "Peck the Topiary", A::BackGardens, C::Interaction),
    loc(1340, "Ring the Wind Chime (G)", A::BackGardens, C::Interaction),
    loc(1341, "Ring the Wind Chime (F)", A::BackGardens, C::Interaction),
    loc(1342, "Ring the Wind Chime (E)", A::BackGardens, C::Interaction),
    loc(1343, "Ring the Wind Chime (D)", A::BackGardens, C::Interaction),
    loc(1344, "Ring the Wind Chime (C)", A::BackGardens, C::Interaction),
    loc(1345, "Ring the Wind Chime (B)", A::BackGardens, C::Interaction),
    loc(1346, "Ring the Wind Chime (A)", A::BackGardens, C::Interaction),
    loc(1330, "Open the Van Door (Left)", A::Pub, C::Interaction),
    loc(1331, "Open the Van Door (Right)", A::Pub, C::Interaction),
    loc(1332, "Untie the Burly Man's Left Laces", A::Pub, C::Interaction),
    loc(1333, "Untie the Burly Man's Right Laces", A::Pub, C::Interaction),
    loc(1334, "Turn on the Pub Tap", A::Pub, C::Interaction),

    loc(1304, "Short Out the Radio", A::Garden, C::AdditionalGoal),
    loc(1305, "Lock the Groundskeeper In", A::Garden, C::AdditionalGoal),
    loc(1306, "Open the Intro Gate", A::Hub, C::AdditionalGoal),
    loc(1310, "Break Through the Boards", A::BackGardens, C::AdditionalGoal),
    loc(1327, "Make the Woman Fix the Topiary", A::BackGardens, C::AdditionalGoal),
    loc(1328, "Pose as a Duck", A::BackGardens, C::AdditionalGoal),
    loc(1335, "Trip the Burly Man", A::Pub, C::AdditionalGoal),

    loc(1350, "Peck Sandcastle Doorway (1)", A::ModelVillage, C::PeckFull),
    loc(1351, "Peck Sandcastle Doorway (2)", A::ModelVillage, C::PeckFull),
    loc(1352, "Peck Sandcastle Doorway (3)", A::ModelVillage, C::PeckFull),
    loc(1353, "Peck Sandcastle Doorway (4)", A::ModelVillage, C::PeckFull),
    loc(1354, "Peck Sandcastle Doorway (5)", A::ModelVillage, C::PeckFull),
    loc(1355, "Peck Sandcastle Doorway (6)", A::ModelVillage, C::PeckFull),
    loc(1356, "Peck Sandcastle Doorway (7)", A::ModelVillage, C::PeckFull),
    loc(1357, "Peck Sandcastle Doorway (8)", A::ModelVillage, C::PeckFull),
    loc(1358, "Peck Sandcastle Doorway (9)", A::ModelVillage, C::PeckFull),
    loc(1359, "Peck Sandcastle Doorway (10)", A::ModelVillage, C::PeckFull),
    loc(1360, "Peck Sandcastle Doorway (11)", A::ModelVillage, C::PeckFull),
    loc(1361, "Peck Sandcastle Doorway (12)", A::ModelVillage, C::PeckFull),
    loc(1362, "Peck Sandcastle Doorway (13)", A::ModelVillage, C::PeckFull),
    loc(1363, "Peck Sandcastle Doorway (14)", A::ModelVillage, C::PeckFull),
    loc(1364, "Peck Sandcastle Doorway (15)", A::ModelVillage, C::PeckFull),
    loc(1365, "Peck Sandcastle Doorway (16)", A::ModelVillage, C::PeckFull),
    loc(1366, "Peck Sandcastle Doorway (17)", A::ModelVillage, C::PeckFull),
    loc(1367, "Peck Sandcastle Doorway (18)", A::ModelVillage, C::PeckFull),
    loc(1368, "Peck Sandcastle Doorway (19)", A::ModelVillage, C::PeckFull),
    loc(1369, "Peck Sandcastle Tower (1)", A::ModelVillage, C::PeckFull),
    loc(1370, "Peck Sandcastle Tower (2)", A::ModelVillage, C::PeckFull),
    loc(1371, "Peck Sandcastle Tower (3)", A::ModelVillage, C::PeckFull),
    loc(1372, "Peck Sandcastle Tower (4)", A::ModelVillage, C::PeckFull),
    loc(1373, "Peck Sandcastle Tower (5)", A::ModelVillage, C::PeckFull),
    loc(1374, "Peck Sandcastle Tower (6)", A::ModelVillage, C::PeckFull),
    loc(1375, "Peck Sandcastle Tower (7)", A::ModelVillage, C::PeckFull),
    loc(1376, "Peck Sandcastle Tower (8)", A::ModelVillage, C::PeckFull),
    loc(1377, "Peck Sandcastle Tower (9)", A::ModelVillage, C::PeckFull),
    loc(1378, "Peck Sandcastle Tower (10)", A::ModelVillage, C::PeckFull),
    loc(1379, "Peck Sandcastle Tower (11)", A::ModelVillage, C::PeckFull),
    loc(1380, "Peck Sandcastle Tower (12)", A::ModelVillage, C::PeckFull),
    loc(1381, "Peck Sandcastle Tower (13)", A::ModelVillage, C::PeckFull),
    loc(1382, "Peck Sandcastle Tower (14)", A::ModelVillage, C::PeckFull),
    loc(1383, "Peck Sandcastle Tower (15)", A::ModelVillage, C::PeckFull),
    loc(1384, "Peck Sandcastle Tower (16)", A::ModelVillage, C::PeckFull),

    loc(1390, "Peck Sandcastle Doorway", A::ModelVillage, C::PeckFirst),
    loc(1391, "Peck Sandcastle Tower", A::ModelVillage, C::PeckFirst),

    loc(1401, "Pick up Carrot (1)", A::Garden, C::UniquePickup),
    loc(1402, "Pick up Carrot (2)", A::Garden, C::UniquePickup),
    loc(1403, "Pick up Carrot (3)", A::Garden, C::UniquePickup),
    loc(1404, "Pick up Carrot (4)", A::Garden, C::UniquePickup),
    loc(1405, "Pick up Carrot (5)", A::Garden, C::UniquePickup),
    loc(1406, "Pick up Carrot (6)", A::Garden, C::UniquePickup),
    loc(1407, "Pick up Carrot (7)", A::Garden, C::UniquePickup),
    loc(1408, "Pick up Carrot (8)", A::Garden, C::UniquePickup),
    loc(1409, "Pick up Carrot (9)", A::Garden, C::UniquePickup),
    loc(1410, "Pick up Carrot (10)", A::Garden, C::UniquePickup),
    loc(1421, "Pick up Pub Tomato (1)", A::Pub, C::UniquePickup),
    loc(1422, "Pick up Pub Tomato (2)", A::Pub, C::UniquePickup),
    loc(1423, "Pick up Pub Tomato (3)", A::Pub, C::UniquePickup),
    loc(1424, "Pick up Pub Tomato (4)", A::Pub, C::UniquePickup),
    loc(1425, "Pick up Pub Tomato (5)", A::Pub, C::UniquePickup),
    loc(1426, "Pick up Pub Tomato (6)", A::Pub, C::UniquePickup),
    loc(1427, "Pick up Pub Tomato (7)", A::Pub, C::UniquePickup),
    loc(1428, "Pick up Pub Tomato (8)", A::Pub, C::UniquePickup),
    loc(1429, "Pick up Pub Tomato (9)", A::Pub, C::UniquePickup),
    loc(1430, "Pick up Pub Tomato (10)", A::Pub, C::UniquePickup),
    loc(1431, "Pick up Pub Tomato (11)", A::Pub, C::UniquePickup),
    loc(1440, "Pick up Boot (Start)", A::Hub, C::UniquePickup),
    loc(1441, "Pick up Boot (Hub)", A::Hub, C::UniquePickup),

    loc(1450, "Drag Topsoil Bag (1)", A::Garden, C::UniqueDrag),
    loc(1451, "Drag Topsoil Bag (2)", A::Garden, C::UniqueDrag),
    loc(1452, "Drag Topsoil Bag (3)", A::Garden, C::UniqueDrag),];

pub const ITEMS: &[ItemData] = &[
    item(100, GARDEN_ACCESS, K::Progression, I::AreaAccess),
    item(101, HIGH_STREET_ACCESS, K::Progression, I::AreaAccess),
    item(102, BACK_GARDENS_ACCESS, K::Progression, I::AreaAccess),
    item(103, PUB_ACCESS, K::Progression, I::AreaAccess),
    item(104, MODEL_VILLAGE_ACCESS, K::Progression, I::AreaAccess),
    item(110, "Progressive Area", K::Progression, I::Progressive),

    item(200, MEGA_HONK, K::Filler, I::Filler),
    item(201, SPEEDY_FEET, K::Filler, I::Filler),
    item(202, SILENT_STEPS, K::Filler, I::Filler),
    item(203, A_GOOSE_DAY, K::Useful, I::Filler),
    item(204, COIN, K::Filler, I::Filler),

    item(300, TIRED_GOOSE, K::Trap, I::Trap),
    item(301, CONFUSED_FEET, K::Trap, I::Trap),
    item(302, BUTTERBEAK, K::Trap, I::Trap),
    item(303, SUSPICIOUS_GOOSE, K::Trap, I::Trap),

    item(400, "Groundskeeper Soul", K::Progression, I::NpcSoul),
    item(401, "Boy Soul", K::Progression, I::NpcSoul),
    item(402, "TV Shop Owner Soul", K::Progression, I::NpcSoul),
    item(403, "Market Lady Soul", K::Progression, I::NpcSoul),
    item(404, "Tidy Neighbour Soul", K::Progression, I::NpcSoul),
    item(405, "Messy Neighbour Soul", K::Progression, I::NpcSoul),
    item(406, "Burly Man Soul", K::Progression, I::NpcSoul),
    item(407, "Old Man Soul", K::Progression, I::NpcSoul),
    item(408, "Pub Lady Soul", K::Progression, I::NpcSoul),
    item(409, "Fancy Ladies Soul", K::Progression, I::NpcSoul),
    item(410, "Cook Soul", K::Progression, I::NpcSoul),

    item(500, "Carrot Soul", K::Progression, I::PropSoul),
    item(501, "Tomato Soul", K::Progression, I::PropSoul),
    item(502, "Pumpkin Soul", K::Progression, I::PropSoul),
    item(503, "Topsoil Bag Soul", K::Progression, I::PropSoul),
    item(504, "Quoit Soul", K::Progression, I::PropSoul),
    item(505, "Plate Soul", K::Progression, I::PropSoul),
    item(506, "Orange Soul", K::Progression, I::PropSoul),
    item(507, "Leek Soul", K::Progression, I::PropSoul),
    item(508, "Cucumber Soul", K::Progression, I::PropSoul),
    item(509, "Umbrella Soul", K::Progression, I::PropSoul),
    item(510, "Tinned Food Soul", K::Progression, I::PropSoul),
    item(511, "Sock Soul", K::Progression, I::PropSoul),
    item(512, "Pint Bottle Soul", K::Progression, I::PropSoul),
    item(513, "Knife Soul", K::Progression, I::PropSoul),
    item(514, "Gumboot Soul", K::Progression, I::PropSoul),
    item(515, "Fork Soul", K::Progression, I::PropSoul),
    item(516, "Apple Core Soul", K::Progression, I::PropSoul),
    item(517, "Apple Soul", K::Progression, I::PropSoul),
    item(518, "Sandwich Soul", K::Progression, I::PropSoul),
    item(519, "Bow Soul", K::Progression, I::PropSoul),
    item(520, "Walkie Talkie Soul", K::Progression, I::PropSoul),
    item(521, "Boot Soul", K::Progression, I::PropSoul),
    item(522, "Mini Person Soul", K::Progression, I::PropSoul),
    item(523, "Radio Soul", K::Progression, I::PropSoul),
    item(524, "Trowel Soul", K::Progression, I::PropSoul),
    item(525, "Tulip Soul", K::Progression, I::PropSoul),
    item(526, "Jam Soul", K::Progression, I::PropSoul),
    item(527, "Picnic Mug Soul", K::Progression, I::PropSoul),
    item(528, "Thermos Soul", K::Progression, I::PropSoul),
    item(529, "Straw Hat Soul", K::Progression, I::PropSoul),
    item(530, "Drink Can Soul", K::Progression, I::PropSoul),
    item(531, "Tennis Ball Soul", K::Progression, I::PropSoul),
    item(532, "Rake Soul", K::Progression, I::PropSoul),
    item(533, "Picnic Basket Soul", K::Progression, I::PropSoul),
    item(534, "Esky Soul", K::Progression, I::PropSoul),
    item(535, "Shovel Soul", K::Progression, I::PropSoul),
    item(536, "Watering Can Soul", K::Progression, I::PropSoul),
    item(537, "Mallet Soul", K::Progression, I::PropSoul),
    item(538, "Wooden Crate Soul", K::Progression, I::PropSoul),
    item(539, "Horn-Rimmed Glasses Soul", K::Progression, I::PropSoul),
    item(540, "Red Glasses Soul", K::Progression, I::PropSoul),
    item(541, "Sunglasses Soul", K::Progression, I::PropSoul),
    item(542, "Loo Paper Soul", K::Progression, I::PropSoul),
    item(543, "Toy Car Soul", K::Progression, I::PropSoul),
    item(544, "Hairbrush Soul", K::Progression, I::PropSoul),
    item(545, "Toothbrush Soul", K::Progression, I::PropSoul),
    item(546, "Stereoscope Soul", K::Progression, I::PropSoul),
    item(547, "Dish Soap Bottle Soul", K::Progression, I::PropSoul),
    item(548, "Spray Bottle Soul", K::Progression, I::PropSoul),
    item(549, "Weed Tool Soul", K::Progression, I::PropSoul),
    item(550, "Lily Flower Soul", K::Progression, I::PropSoul),
    item(551, "Fusilage Soul", K::Progression, I::PropSoul),
    item(552, "Chalk Soul", K::Progression, I::PropSoul),
    item(553, "Dustbin Lid Soul", K::Progression, I::PropSoul),
    item(554, "Shopping Basket Soul", K::Progression, I::PropSoul),
    item(555, "Push Broom Soul", K::Progression, I::PropSoul),
    item(556, "Dustbin Soul", K::Progression, I::PropSoul),
    item(557, "Baby Doll Soul", K::Progression, I::PropSoul),
    item(558, "Pricing Gun Soul", K::Progression, I::PropSoul),
    item(559, "Adding Machine Soul", K::Progression, I::PropSoul),
    item(560, "Dummy Soul", K::Progression, I::PropSoul),
    item(561, "Cricket Ball Soul", K::Progression, I::PropSoul),
    item(562, "Bust Pipe Soul", K::Progression, I::PropSoul),
    item(563, "Bust Hat Soul", K::Progression, I::PropSoul),
    item(564, "Bust Glasses Soul", K::Progression, I::PropSoul),
    item(565, "Tea Cup Soul", K::Progression, I::PropSoul),
    item(566, "Newspaper Soul", K::Progression, I::PropSoul),
    item(567, "Badminton Racket Soul", K::Progression, I::PropSoul),
    item(568, "Pot Stack Soul", K::Progression, I::PropSoul),
    item(569, "Soap Soul", K::Progression, I::PropSoul),
    item(570, "Paintbrush Soul", K::Progression, I::PropSoul),
    item(571, "Vase Soul", K::Progression, I::PropSoul),
    item(572, "Bra Soul", K::Progression, I::PropSoul),
    item(573, "Rose Soul", K::Progression, I::PropSoul),
    item(574, "Cricket Bat Soul", K::Progression, I::PropSoul),
    item(575, "Tea Pot Soul", K::Progression, I::PropSoul),
    item(576, "Clippers Soul", K::Progression, I::PropSoul),
    item(577, "Duck Statue Soul", K::Progression, I::PropSoul),
    item(578, "Frog Statue Soul", K::Progression, I::PropSoul),
    item(579, "Jeremy Fish Soul", K::Progression, I::PropSoul),
    item(580, "Messy Sign Soul", K::Progression, I::PropSoul),
    item(581, "Drawer Soul", K::Progression, I::PropSoul),
    item(582, "Enamel Jug Soul", K::Progression, I::PropSoul),
    item(583, "Clean Sign Soul", K::Progression, I::PropSoul),
    item(584, "Fishing Bobber Soul", K::Progression, I::PropSoul),
    item(585, "Exit Letter Soul", K::Progression, I::PropSoul),
    item(586, "Pint Glass Soul", K::Progression, I::PropSoul),
    item(587, "Toy Boat Soul", K::Progression, I::PropSoul),
    item(588, "Pepper Grinder Soul", K::Progression, I::PropSoul),
    item(589, "Cork Soul", K::Progression, I::PropSoul),
    item(590, "Candlestick Soul", K::Progression, I::PropSoul),
    item(591, "Flower for Vase Soul", K::Progression, I::PropSoul),
    item(592, "Harmonica Soul", K::Progression, I::PropSoul),
    item(593, "Tackle Box Soul", K::Progression, I::PropSoul),
    item(594, "Traffic Cone Soul", K::Progression, I::PropSoul),
    item(595, "Exit Parcel Soul", K::Progression, I::PropSoul),
    item(596, "Stealth Box Soul", K::Progression, I::PropSoul),
    item(597, "No Goose Sign Soul", K::Progression, I::PropSoul),
    item(598, "Portable Stool Soul", K::Progression, I::PropSoul),
    item(599, "Dartboard Soul", K::Progression, I::PropSoul),
    item(600, "Mop Bucket Soul", K::Progression, I::PropSoul),
    item(601, "Mop Soul", K::Progression, I::PropSoul),
    item(602, "Burly Mans Bucket Soul", K::Progression, I::PropSoul),
    item(603, "Mini Mail Pillar Soul", K::Progression, I::PropSoul),
    item(604, "Mini Phone Door Soul", K::Progression, I::PropSoul),
    item(605, "Mini Shovel Soul", K::Progression, I::PropSoul),
    item(606, "Poppy Flower Soul", K::Progression, I::PropSoul),
    item(607, "Timber Handle Soul", K::Progression, I::PropSoul),
    item(608, "Birdbath Soul", K::Progression, I::PropSoul),
    item(609, "Easel Soul", K::Progression, I::PropSoul),
    item(610, "Mini Bench Soul", K::Progression, I::PropSoul),
    item(611, "Mini Pump Soul", K::Progression, I::PropSoul),
    item(612, "Sun Lounge Soul", K::Progression, I::PropSoul),

    item(998, GOLDEN_BELL_SOUL, K::Progression, I::Victory),
    item(999, GOLDEN_BELL, K::Progression, I::Victory),
];

static LOCATIONS_BY_NAME: Lazy<HashMap<&'static str, &'static LocationData>> =
    Lazy::new(|| LOCATIONS.iter().map(|l| (l.name, l)).collect());

static ITEMS_BY_NAME: Lazy<HashMap<&'static str, &'static ItemData>> =
    Lazy::new(|| ITEMS.iter().map(|i| (i.name, i)).collect());

pub fn location_by_name(name: &str) -> Option<&'static LocationData> {
    LOCATIONS_BY_NAME.get(name).copied()
}

pub fn item_by_name(name: &str) -> Option<&'static ItemData> {
    ITEMS_BY_NAME.get(name).copied()
}

pub fn locations_in(category: LocationCategory) -> impl Iterator<Item = &'static LocationData> {
    LOCATIONS.iter().filter(move |l| l.category == category)
}

pub fn items_in(group: ItemGroup) -> impl Iterator<Item = &'static ItemData> {
    ITEMS.iter().filter(move |i| i.group == group)
}

/// Full name -> id universe for hosts, whatever the slot's options are.
pub fn all_location_ids() -> BTreeMap<&'static str, u64> {
    LOCATIONS.iter().map(|l| (l.name, l.id())).collect()
}

pub fn all_item_ids() -> BTreeMap<&'static str, u64> {
    ITEMS.iter().map(|i| (i.name, i.id())).collect()
}

/// Every id and every name must be unique across the whole table.
pub fn verify_catalog() -> Result<()> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for l in LOCATIONS {
        if !ids.insert(l.id()) {
            return Err(RandomiserError::GenerationInvariant(format!(
                "duplicate location id {} ({})",
                l.id(),
                l.name
            )));
        }
        if !names.insert(l.name) {
            return Err(RandomiserError::GenerationInvariant(format!(
                "duplicate location name {}",
                l.name
            )));
        }
    }

    ids.clear();
    names.clear();
    for i in ITEMS {
        if !ids.insert(i.id()) {
            return Err(RandomiserError::GenerationInvariant(format!(
                "duplicate item id {} ({})",
                i.id(),
                i.name
            )));
        }
        if !names.insert(i.name) {
            return Err(RandomiserError::GenerationInvariant(format!(
                "duplicate item name {}",
                i.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_no_duplicates() {
        assert!(verify_catalog().is_ok());
        assert_eq!(all_location_ids().len(), LOCATIONS.len());
        assert_eq!(all_item_ids().len(), ITEMS.len());
    }

    #[test]
    fn golden_bell_ids_are_stable() {
        assert_eq!(item_by_name(GOLDEN_BELL).unwrap().id(), 119_000_999);
        assert_eq!(
            location_by_name(PICK_UP_GOLDEN_BELL).unwrap().id(),
            119_001_143
        );
        assert_eq!(
            location_by_name(PICK_UP_GOLDEN_BELL).unwrap().area,
            Area::ModelVillage
        );
    }

    #[test]
    fn category_sizes() {
        assert_eq!(locations_in(LocationCategory::CoreGoal).count(), 33);
        assert_eq!(locations_in(LocationCategory::GoalVariant).count(), 6);
        assert_eq!(locations_in(LocationCategory::PeckFirst).count(), 2);
        assert_eq!(locations_in(LocationCategory::PeckFull).count(), 35);
        assert_eq!(items_in(ItemGroup::NpcSoul).count(), 11);
        assert_eq!(items_in(ItemGroup::AreaAccess).count(), 5);
    }

    #[test]
    fn ids_fall_in_their_category_ranges() {
        for l in LOCATIONS {
            let ok = match l.category {
                LocationCategory::CoreGoal => l.offset <= 42 || l.offset == 1143,
                LocationCategory::ExtraGoal => (50..=67).contains(&l.offset),
                LocationCategory::SpeedrunGoal => (70..=73).contains(&l.offset),
                LocationCategory::Completion => l.offset == 80,
                LocationCategory::MilestoneMain
                | LocationCategory::MilestoneExtra
                | LocationCategory::MilestoneSpeedrun
                | LocationCategory::MilestoneAllTasks
                | LocationCategory::GoalVariant => (81..=94).contains(&l.offset),
                LocationCategory::ItemPickup => (1001..=1150).contains(&l.offset),
                LocationCategory::DragItem => (1201..=1299).contains(&l.offset),
                LocationCategory::Interaction | LocationCategory::AdditionalGoal => {
                    (1301..=1349).contains(&l.offset)
                }
                LocationCategory::PeckFull | LocationCategory::PeckFirst => {
                    (1350..=1399).contains(&l.offset)
                }
                LocationCategory::UniquePickup => (1401..=1449).contains(&l.offset),
                LocationCategory::UniqueDrag => (1450..=1499).contains(&l.offset),
            };
            assert!(ok, "{} has offset {} outside its range", l.name, l.offset);
        }
    }
}
