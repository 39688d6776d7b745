//! `word_bank` — the curated built-in word bank and clue resolution.
//!
//! The bank pairs answers with hand-written clues and feeds the lexicon at
//! score 1.0. Clue resolution for words outside the bank works by
//! inflection stripping (plural, past tense, and so on, derived from a
//! bank base form) and finally by an external semantic dictionary, which
//! this crate only knows through the [`SemanticLookup`] trait.

use std::collections::HashMap;
use std::sync::LazyLock;

/// External semantic dictionary interface (e.g. a WordNet-style service).
/// Implementations resolve a short definition usable as a clue.
pub trait SemanticLookup {
    /// A short, crossword-style definition for `word` (uppercase A–Z),
    /// or `None` when the word is unknown.
    fn definition(&self, word: &str) -> Option<String>;
}

/// Curated answers with hand-written clues. All answers uppercase A–Z.
pub static WORD_BANK: &[(&str, &str)] = &[
    // 3 letters
    ("ACE", "Top card"),
    ("AGE", "Years lived"),
    ("AIR", "What we breathe"),
    ("ANT", "Picnic pest"),
    ("APE", "Gorilla, e.g."),
    ("ARC", "Curved path"),
    ("ARE", "Exist, to us"),
    ("ARM", "Limb with an elbow"),
    ("ART", "Gallery display"),
    ("ASH", "Fireplace residue"),
    ("ATE", "Had dinner"),
    ("AXE", "Lumberjack's tool"),
    ("BAT", "Cave flier"),
    ("BED", "Place to sleep"),
    ("BEE", "Honey maker"),
    ("BOW", "Archer's need"),
    ("BOX", "Cardboard container"),
    ("BUS", "City transit vehicle"),
    ("CAB", "Taxi"),
    ("CAP", "Bottle topper"),
    ("CAR", "Garage occupant"),
    ("CAT", "Feline pet"),
    ("COW", "Dairy farm animal"),
    ("CUP", "Coffee vessel"),
    ("DAY", "Sunrise to sunset"),
    ("DEN", "Lion's lair"),
    ("DEW", "Morning moisture"),
    ("DOG", "Loyal companion"),
    ("DOT", "Tiny mark"),
    ("DRY", "Like a desert"),
    ("EAR", "Hearing organ"),
    ("EAT", "Have a meal"),
    ("EGG", "Omelet need"),
    ("END", "Finish"),
    ("ERA", "Historical period"),
    ("EVE", "Night before"),
    ("EYE", "Seeing organ"),
    ("FAN", "Cooling device"),
    ("FIG", "Newton fruit"),
    ("FIN", "Shark feature"),
    ("FLY", "Buzzing insect"),
    ("FOG", "Low cloud"),
    ("FOX", "Sly animal"),
    ("GAS", "Stove fuel"),
    ("GEM", "Jeweler's stone"),
    ("GUM", "Chewing stick"),
    ("GYM", "Workout spot"),
    ("HAT", "Head topper"),
    ("HEN", "Egg layer"),
    ("HUT", "Simple shelter"),
    ("ICE", "Frozen water"),
    ("INK", "Pen filler"),
    ("ION", "Charged particle"),
    ("IVY", "Climbing vine"),
    ("JAM", "Toast spread"),
    ("JAR", "Pickle container"),
    ("JET", "Fast plane"),
    ("JOY", "Great delight"),
    ("KEY", "Lock opener"),
    ("LAB", "Scientist's workplace"),
    ("LAP", "Pool length"),
    ("LAW", "Legal rule"),
    ("LEG", "Table support"),
    ("LID", "Pot cover"),
    ("LOG", "Fireplace fuel"),
    ("MAP", "Navigator's aid"),
    ("MAT", "Doorstep item"),
    ("MUD", "Rainy-day mess"),
    ("MUG", "Cocoa cup"),
    ("NAP", "Short sleep"),
    ("NET", "Fisherman's gear"),
    ("NOD", "Silent yes"),
    ("OAK", "Acorn tree"),
    ("OAR", "Rowboat need"),
    ("ODE", "Praise poem"),
    ("OIL", "Salad dressing base"),
    ("ONE", "Loneliest number"),
    ("ORE", "Miner's find"),
    ("OWL", "Night bird"),
    ("PAN", "Frying vessel"),
    ("PAW", "Dog's foot"),
    ("PEA", "Pod vegetable"),
    ("PEN", "Writing tool"),
    ("PET", "Household animal"),
    ("PIE", "Dessert with a crust"),
    ("PIG", "Farm oinker"),
    ("PIN", "Bowling target"),
    ("POT", "Stew vessel"),
    ("RAT", "Sewer rodent"),
    ("RAW", "Uncooked"),
    ("RIB", "Barbecue cut"),
    ("RIM", "Basketball hoop part"),
    ("ROW", "Boat with oars"),
    ("RUG", "Floor cover"),
    ("RUN", "Jog quickly"),
    ("RYE", "Bread grain"),
    ("SAW", "Carpenter's tool"),
    ("SEA", "Sailor's expanse"),
    ("SET", "Tennis unit"),
    ("SKY", "Cloud's home"),
    ("SPA", "Relaxation resort"),
    ("SUM", "Addition result"),
    ("SUN", "Daytime star"),
    ("TAX", "April obligation"),
    ("TEA", "Afternoon brew"),
    ("TED", "Spread hay to dry"),
    ("TEN", "Perfect score"),
    ("TIE", "Necktie"),
    ("TIN", "Can metal"),
    ("TOE", "Foot digit"),
    ("TON", "Heavy weight"),
    ("TOP", "Spinning toy"),
    ("TOY", "Child's plaything"),
    ("TUB", "Bath vessel"),
    ("URN", "Tea dispenser"),
    ("VAN", "Mover's truck"),
    ("VOW", "Solemn promise"),
    ("WAX", "Candle material"),
    ("WEB", "Spider's creation"),
    ("WED", "Marry"),
    ("WIG", "Hair piece"),
    ("WIN", "Take first place"),
    ("YAK", "Himalayan beast"),
    ("YAM", "Sweet potato kin"),
    ("ZOO", "Animal park"),
    // 4 letters
    ("ABLE", "Capable"),
    ("ACHE", "Dull pain"),
    ("ACID", "Lemon juice quality"),
    ("AREA", "Region"),
    ("ARIA", "Opera solo"),
    ("ATOM", "Matter unit"),
    ("AUNT", "Family member"),
    ("AXLE", "Wheel rod"),
    ("BAKE", "Make bread"),
    ("BAND", "Rock group"),
    ("BARN", "Hay storage"),
    ("BEAD", "Necklace unit"),
    ("BEAN", "Chili ingredient"),
    ("BEAR", "Forest heavyweight"),
    ("BELL", "Tower ringer"),
    ("BELT", "Waist band"),
    ("BEND", "Curve in the road"),
    ("BIRD", "Nest builder"),
    ("BLUE", "Sky color"),
    ("BOAT", "Harbor sight"),
    ("BOLT", "Lightning flash"),
    ("BONE", "Skeleton piece"),
    ("BOOK", "Library item"),
    ("BOOT", "Winter footwear"),
    ("BOWL", "Soup holder"),
    ("BREW", "Make coffee"),
    ("CAGE", "Bird enclosure"),
    ("CAKE", "Birthday dessert"),
    ("CALF", "Young cow"),
    ("CALM", "Peaceful"),
    ("CAMP", "Summer retreat"),
    ("CANE", "Walking stick"),
    ("CAPE", "Superhero garb"),
    ("CARD", "Deck unit"),
    ("CARE", "Look after"),
    ("CART", "Grocery pusher"),
    ("CASE", "Detective's assignment"),
    ("CASH", "Paper money"),
    ("CAST", "Play's performers"),
    ("CAVE", "Bat's home"),
    ("CHEF", "Kitchen boss"),
    ("CHIN", "Jaw point"),
    ("CITY", "Urban center"),
    ("CLAM", "Chowder morsel"),
    ("CLAY", "Potter's material"),
    ("CLIP", "Paper fastener"),
    ("CLUB", "Golf stick"),
    ("COAL", "Stocking filler for the naughty"),
    ("COAT", "Winter wear"),
    ("CODE", "Programmer's product"),
    ("COIN", "Pocket change"),
    ("COLD", "Winter feeling"),
    ("COMB", "Hair tool"),
    ("CONE", "Ice cream holder"),
    ("COOK", "Prepare food"),
    ("CORD", "Electrical line"),
    ("CORE", "Apple center"),
    ("CORN", "Cob crop"),
    ("COVE", "Small bay"),
    ("CRAB", "Sideways walker"),
    ("CREW", "Ship's staff"),
    ("CROW", "Black bird"),
    ("CUBE", "Sugar shape"),
    ("DARK", "Without light"),
    ("DART", "Pub projectile"),
    ("DAWN", "Daybreak"),
    ("DEER", "Forest grazer"),
    ("DESK", "Office furniture"),
    ("DIAL", "Old phone feature"),
    ("DICE", "Casino cubes"),
    ("DIET", "Eating plan"),
    ("DIRT", "Garden soil"),
    ("DISH", "Dinner plate"),
    ("DIVE", "Pool plunge"),
    ("DOCK", "Boat's berth"),
    ("DOLL", "Child's figure"),
    ("DOME", "Capitol topper"),
    ("DOOR", "Room entry"),
    ("DOVE", "Peace symbol"),
    ("DRUM", "Marching band item"),
    ("DUCK", "Pond paddler"),
    ("DUNE", "Sand hill"),
    ("DUST", "Shelf accumulation"),
    ("EAST", "Sunrise direction"),
    ("ECHO", "Canyon reply"),
    ("EDGE", "Cliff's brink"),
    ("EDIT", "Revise text"),
    ("FARM", "Crop land"),
    ("FERN", "Shade plant"),
    ("FIRE", "Campsite glow"),
    ("FISH", "Aquarium dweller"),
    ("FLAG", "Pole flier"),
    ("FOAM", "Sea froth"),
    ("FORK", "Table utensil"),
    ("FROG", "Lily pad sitter"),
    ("GATE", "Fence opening"),
    ("GIFT", "Birthday box"),
    ("GLUE", "Craft adhesive"),
    ("GOAT", "Mountain climber"),
    ("GOLD", "Precious metal"),
    ("HAND", "Clock pointer"),
    ("HARP", "Angel's instrument"),
    ("HERO", "Story's champion"),
    ("HILL", "Small rise"),
    ("HIVE", "Bee home"),
    ("HOOD", "Jacket topper"),
    ("HOOF", "Horse's foot"),
    ("HORN", "Car warning"),
    ("ICON", "Desktop symbol"),
    ("IRON", "Wrinkle remover"),
    ("KITE", "Windy-day flier"),
    ("LAKE", "Inland water"),
    ("LAMP", "Desk light"),
    ("LEAF", "Autumn faller"),
    ("LIME", "Green citrus"),
    ("LION", "Savanna king"),
    ("MAST", "Sail support"),
    ("MAZE", "Puzzle of paths"),
    ("MINT", "Mojito herb"),
    ("MOON", "Night light"),
    ("MOSS", "Forest carpet"),
    ("NEST", "Bird's home"),
    ("NOTE", "Musical symbol"),
    ("OVEN", "Baker's chamber"),
    ("PALM", "Tropical tree"),
    ("PARK", "Picnic place"),
    ("PEAR", "Teardrop fruit"),
    ("PIER", "Fishing platform"),
    ("PINE", "Evergreen tree"),
    ("POND", "Duck habitat"),
    ("RAIN", "Umbrella weather"),
    ("REEF", "Coral formation"),
    ("RICE", "Sushi staple"),
    ("ROAD", "Driving surface"),
    ("ROCK", "Climber's surface"),
    ("ROOF", "House topper"),
    ("ROPE", "Climber's line"),
    ("ROSE", "Valentine flower"),
    ("SAIL", "Wind catcher"),
    ("SALT", "Pepper's partner"),
    ("SAND", "Beach surface"),
    ("SEED", "Garden starter"),
    ("SHIP", "Ocean vessel"),
    ("SNOW", "Winter blanket"),
    ("SOAP", "Bath bar"),
    ("SOCK", "Shoe liner"),
    ("SOFA", "Living room seat"),
    ("SONG", "Radio tune"),
    ("STAR", "Night twinkler"),
    ("TENT", "Camper's shelter"),
    ("TIDE", "Ocean cycle"),
    ("TREE", "Trunk bearer"),
    ("VASE", "Flower holder"),
    ("VINE", "Grape bearer"),
    ("WAVE", "Surfer's ride"),
    ("WELL", "Water source"),
    ("WEST", "Sunset direction"),
    ("WIND", "Kite lifter"),
    ("WOLF", "Pack howler"),
    ("WOOD", "Lumber material"),
    ("WOOL", "Sheep's coat"),
    ("YARD", "Lawn area"),
    ("YARN", "Knitter's supply"),
    // 5 letters
    ("ACTOR", "Stage performer"),
    ("ADOBE", "Sun-dried brick"),
    ("AGENT", "Spy, e.g."),
    ("ALARM", "Morning buzzer"),
    ("ALBUM", "Photo book"),
    ("ALERT", "Watchful"),
    ("ALLEY", "Narrow passage"),
    ("AMBER", "Fossilized resin"),
    ("ANGEL", "Halo wearer"),
    ("ANGLE", "Geometry measure"),
    ("ANKLE", "Foot joint"),
    ("APPLE", "Orchard fruit"),
    ("APRON", "Cook's cover"),
    ("ARENA", "Sports venue"),
    ("AROMA", "Pleasant smell"),
    ("ARROW", "Quiver item"),
    ("ATLAS", "Book of maps"),
    ("AUDIO", "Sound component"),
    ("BACON", "Breakfast strip"),
    ("BADGE", "Officer's ID"),
    ("BAKER", "Bread maker"),
    ("BANJO", "Bluegrass instrument"),
    ("BARGE", "River hauler"),
    ("BASIL", "Pesto herb"),
    ("BATON", "Relay handoff"),
    ("BEACH", "Sandy shore"),
    ("BEARD", "Chin cover"),
    ("BEAST", "Wild animal"),
    ("BERRY", "Small fruit"),
    ("BIRCH", "White-barked tree"),
    ("BISON", "Plains grazer"),
    ("BLADE", "Knife edge"),
    ("BLAZE", "Roaring fire"),
    ("BLEND", "Smoothie verb"),
    ("BLOOM", "Flower's opening"),
    ("BOARD", "Chess surface"),
    ("BONUS", "Extra pay"),
    ("BOOTH", "Diner seat"),
    ("BRAID", "Woven hair"),
    ("BRAIN", "Thinking organ"),
    ("BRAKE", "Car stopper"),
    ("BRASS", "Trumpet metal"),
    ("BREAD", "Sandwich base"),
    ("BRICK", "Wall unit"),
    ("BRIDE", "Wedding figure"),
    ("BROOK", "Small stream"),
    ("BROOM", "Sweeper's tool"),
    ("BRUSH", "Painter's tool"),
    ("CABIN", "Woodland dwelling"),
    ("CABLE", "TV hookup"),
    ("CAMEL", "Desert transport"),
    ("CANAL", "Venice waterway"),
    ("CANDY", "Sweet treat"),
    ("CANOE", "Paddled craft"),
    ("CARGO", "Ship's load"),
    ("CEDAR", "Chest wood"),
    ("CHAIR", "Seat with a back"),
    ("CHALK", "Blackboard stick"),
    ("CHESS", "Board game with kings"),
    ("CHEST", "Treasure holder"),
    ("CHIME", "Doorbell sound"),
    ("CIDER", "Autumn drink"),
    ("CLIFF", "Sheer drop"),
    ("CLOCK", "Time keeper"),
    ("CLOUD", "Sky puff"),
    ("CORAL", "Reef builder"),
    ("CRANE", "Construction lifter"),
    ("CREEK", "Small stream"),
    ("CROWN", "Royal headwear"),
    ("DAIRY", "Milk farm"),
    ("DANCE", "Ballroom activity"),
    ("DELTA", "River's mouth"),
    ("DENIM", "Jeans fabric"),
    ("DRIFT", "Float along"),
    ("EAGLE", "Bald bird"),
    ("EARTH", "Third planet"),
    ("ELBOW", "Arm joint"),
    ("EMBER", "Glowing coal"),
    ("FENCE", "Yard boundary"),
    ("FIELD", "Crop expanse"),
    ("FLAME", "Candle light"),
    ("FLOUR", "Baking staple"),
    ("FLUTE", "Woodwind instrument"),
    ("FROST", "Window icing"),
    ("FRUIT", "Orchard yield"),
    ("GLOBE", "Desk sphere"),
    ("GLOVE", "Hand cover"),
    ("GRAIN", "Wheat kernel"),
    ("GRAPE", "Vineyard fruit"),
    ("GRASS", "Lawn cover"),
    ("GUEST", "Party attendee"),
    ("HEART", "Valentine shape"),
    ("HONEY", "Bee product"),
    ("HORSE", "Stable dweller"),
    ("HOTEL", "Traveler's stop"),
    ("HOUSE", "Family dwelling"),
    ("IGLOO", "Ice dwelling"),
    ("IVORY", "Piano key material"),
    ("JUICE", "Breakfast beverage"),
    ("KAYAK", "Palindromic boat"),
    ("LEMON", "Sour fruit"),
    ("LIGHT", "Lamp output"),
    ("LINEN", "Tablecloth fabric"),
    ("LLAMA", "Andean pack animal"),
    ("MANGO", "Tropical fruit"),
    ("MAPLE", "Syrup source"),
    ("MARSH", "Wetland"),
    ("MEDAL", "Olympic award"),
    ("MOOSE", "Antlered giant"),
    ("MOUSE", "Computer pointer"),
    ("MUSIC", "Concert offering"),
    ("NORTH", "Compass point"),
    ("NURSE", "Hospital worker"),
    ("OCEAN", "Vast water"),
    ("OLIVE", "Martini garnish"),
    ("ONION", "Tearful vegetable"),
    ("OPERA", "Sung drama"),
    ("ORBIT", "Satellite's path"),
    ("OTTER", "Playful swimmer"),
    ("PAINT", "Decorator's supply"),
    ("PEARL", "Oyster's gift"),
    ("PIANO", "Keyboard instrument"),
    ("PILOT", "Cockpit occupant"),
    ("PLANT", "Garden grower"),
    ("PLATE", "Dinner disc"),
    ("PORCH", "Front sitting area"),
    ("QUILT", "Patchwork cover"),
    ("RADIO", "Car dashboard fixture"),
    ("RAVEN", "Poe's bird"),
    ("RIVER", "Flowing water"),
    ("ROBIN", "Red-breasted bird"),
    ("SALAD", "Leafy course"),
    ("SCARF", "Neck warmer"),
    ("SHEEP", "Wool source"),
    ("SHELL", "Beach find"),
    ("SHORE", "Water's edge"),
    ("SMILE", "Friendly expression"),
    ("SNAIL", "Shelled crawler"),
    ("SOLAR", "Sun-powered"),
    ("SOUTH", "Compass point"),
    ("SPICE", "Flavor enhancer"),
    ("SPOON", "Cereal utensil"),
    ("STAGE", "Actor's platform"),
    ("STONE", "River skipper"),
    ("STORM", "Thunder bringer"),
    ("SUGAR", "Sweetener"),
    ("TABLE", "Dining surface"),
    ("TIGER", "Striped cat"),
    ("TORCH", "Flame carrier"),
    ("TOWER", "Castle feature"),
    ("TRAIL", "Hiking path"),
    ("TRAIN", "Rail rider"),
    ("TULIP", "Dutch flower"),
    ("WAGON", "Pioneer's vehicle"),
    ("WHALE", "Ocean giant"),
    ("WHEAT", "Bread grain"),
    ("ZEBRA", "Striped grazer"),
    // 6 letters
    ("ANCHOR", "Ship stabilizer"),
    ("ANIMAL", "Zoo resident"),
    ("ANSWER", "Reply"),
    ("ANTHEM", "National song"),
    ("ARCADE", "Game hall"),
    ("ARCHER", "Bow user"),
    ("AUTUMN", "Fall season"),
    ("AVENUE", "Broad street"),
    ("BAKERY", "Bread shop"),
    ("BALLAD", "Slow song"),
    ("BALLET", "Dance with tutus"),
    ("BAMBOO", "Panda food"),
    ("BANNER", "Parade display"),
    ("BARREL", "Wine container"),
    ("BASKET", "Picnic carrier"),
    ("BEACON", "Guiding light"),
    ("BEETLE", "Hard-shelled insect"),
    ("BORDER", "Country edge"),
    ("BOTTLE", "Message holder, at sea"),
    ("BRANCH", "Tree limb"),
    ("BREEZE", "Gentle wind"),
    ("BRIDGE", "River crosser"),
    ("BRONZE", "Third-place medal"),
    ("BUCKET", "Mop's partner"),
    ("BUNDLE", "Tied package"),
    ("BUTTER", "Toast topper"),
    ("BUTTON", "Shirt fastener"),
    ("CACTUS", "Desert plant"),
    ("CAMERA", "Photographer's tool"),
    ("CANDLE", "Birthday cake topper"),
    ("CANVAS", "Painter's surface"),
    ("CANYON", "Deep gorge"),
    ("CARBON", "Pencil element"),
    ("CARPET", "Floor covering"),
    ("CASTLE", "Royal residence"),
    ("CELLAR", "Wine storage"),
    ("CEREAL", "Breakfast bowlful"),
    ("CHERRY", "Sundae topper"),
    ("CHORUS", "Song's refrain"),
    ("CIRCLE", "Round shape"),
    ("CIRCUS", "Big top show"),
    ("CITRUS", "Orange family"),
    ("CLOVER", "Lucky find"),
    ("COBALT", "Deep blue"),
    ("COFFEE", "Morning brew"),
    ("COLUMN", "Newspaper feature"),
    ("COMEDY", "Funny film"),
    ("COPPER", "Penny metal"),
    ("COTTON", "T-shirt fabric"),
    ("CRADLE", "Baby's bed"),
    ("CRAYON", "Child's coloring stick"),
    ("DESERT", "Arid expanse"),
    ("DINNER", "Evening meal"),
    ("DONKEY", "Stubborn beast"),
    ("DRAGON", "Fire breather"),
    ("EDITOR", "Manuscript marker"),
    ("ENGINE", "Car's heart"),
    ("FABRIC", "Tailor's material"),
    ("FALCON", "Swift raptor"),
    ("FLOWER", "Garden bloom"),
    ("FOREST", "Dense woods"),
    ("GARDEN", "Flower plot"),
    ("GAZEBO", "Garden shelter"),
    ("GINGER", "Spicy root"),
    ("GUITAR", "Six-string instrument"),
    ("HAMMER", "Nail driver"),
    ("HARBOR", "Ship haven"),
    ("HELMET", "Cyclist's protection"),
    ("ISLAND", "Land in water"),
    ("JACKET", "Light coat"),
    ("JUNGLE", "Dense tropics"),
    ("KETTLE", "Tea heater"),
    ("LADDER", "Rung climber"),
    ("LAGOON", "Tropical pool"),
    ("LETTER", "Mailbox arrival"),
    ("MARBLE", "Sculptor's stone"),
    ("MARKET", "Shopping venue"),
    ("MEADOW", "Grassy field"),
    ("MIRROR", "Reflection giver"),
    ("MONKEY", "Banana lover"),
    ("MUSEUM", "Exhibit hall"),
    ("NEEDLE", "Thread holder"),
    ("ORANGE", "Citrus fruit"),
    ("ORCHID", "Exotic flower"),
    ("PALACE", "Royal home"),
    ("PARROT", "Talking bird"),
    ("PEBBLE", "Small stone"),
    ("PEPPER", "Salt's partner"),
    ("PICNIC", "Outdoor meal"),
    ("PILLOW", "Head rest"),
    ("PLANET", "Solar system member"),
    ("POCKET", "Pants pouch"),
    ("POTATO", "Mashed side"),
    ("PURPLE", "Royal color"),
    ("RABBIT", "Carrot cruncher"),
    ("RIBBON", "Gift wrap accent"),
    ("ROCKET", "Space launcher"),
    ("SADDLE", "Rider's seat"),
    ("SALMON", "Upstream swimmer"),
    ("SCHOOL", "Learning place"),
    ("SEASON", "Quarter of the year"),
    ("SHADOW", "Sunny-day follower"),
    ("SILVER", "Second-place medal"),
    ("SPIDER", "Web spinner"),
    ("SPRING", "Season of blooms"),
    ("STREAM", "Babbling water"),
    ("STREET", "City road"),
    ("SUMMER", "Beach season"),
    ("TEMPLE", "Worship place"),
    ("THRONE", "Royal seat"),
    ("TOMATO", "Salad red"),
    ("TUNNEL", "Mountain passage"),
    ("TURTLE", "Shelled reptile"),
    ("VALLEY", "Land between hills"),
    ("VELVET", "Plush fabric"),
    ("VIOLET", "Purple flower"),
    ("VIOLIN", "String instrument"),
    ("WALNUT", "Brownie nut"),
    ("WINDOW", "Wall opening"),
    ("WINTER", "Snow season"),
    ("YELLOW", "Banana color"),
    // 7 letters
    ("ACROBAT", "Circus tumbler"),
    ("AIRPORT", "Jet hub"),
    ("ALMANAC", "Yearly reference"),
    ("ANTENNA", "Signal catcher"),
    ("AVOCADO", "Guacamole base"),
    ("BALCONY", "Theater tier"),
    ("BALLOON", "Party floater"),
    ("BANDAGE", "Wound cover"),
    ("BARGAIN", "Good deal"),
    ("BEDROOM", "Sleeping quarters"),
    ("BICYCLE", "Two-wheeler"),
    ("BISCUIT", "Tea accompaniment"),
    ("BLANKET", "Bed cover"),
    ("BLOSSOM", "Spring bloom"),
    ("BONFIRE", "Beach blaze"),
    ("BRACKET", "Tournament chart"),
    ("CABBAGE", "Slaw base"),
    ("CABINET", "Kitchen storage"),
    ("CAPTAIN", "Ship's leader"),
    ("CARAVAN", "Desert convoy"),
    ("CARTOON", "Animated short"),
    ("CASCADE", "Waterfall"),
    ("CEILING", "Room topper"),
    ("CENTURY", "Hundred years"),
    ("CHAMBER", "Private room"),
    ("CHANNEL", "TV station"),
    ("CHAPTER", "Book division"),
    ("CHARIOT", "Roman racer"),
    ("CHIMNEY", "Santa's entrance"),
    ("CITADEL", "Hilltop fortress"),
    ("CLUSTER", "Tight group"),
    ("COMPASS", "Direction finder"),
    ("CONCERT", "Live music event"),
    ("COSTUME", "Halloween wear"),
    ("COTTAGE", "Country home"),
    ("COUNCIL", "Advisory body"),
    ("CRACKER", "Soup accompaniment"),
    ("CRICKET", "Chirping insect"),
    ("CRYSTAL", "Chandelier piece"),
    ("CURRENT", "River flow"),
    ("CUSHION", "Sofa softener"),
    ("DIAMOND", "Baseball field"),
    ("DOLPHIN", "Clever swimmer"),
    ("DRIZZLE", "Light rain"),
    ("FEATHER", "Pillow filler"),
    ("FREIGHT", "Cargo load"),
    ("GALLERY", "Art display hall"),
    ("GLACIER", "Slow ice river"),
    ("GRANITE", "Countertop stone"),
    ("HABITAT", "Animal's home"),
    ("HAMMOCK", "Backyard swing"),
    ("HARVEST", "Autumn gathering"),
    ("HIGHWAY", "Fast road"),
    ("HORIZON", "Where sky meets sea"),
    ("JOURNAL", "Daily diary"),
    ("KITCHEN", "Cooking room"),
    ("LANTERN", "Camping light"),
    ("LIBRARY", "Book lender"),
    ("MACHINE", "Factory fixture"),
    ("MONSOON", "Seasonal rains"),
    ("ORCHARD", "Fruit grove"),
    ("OSTRICH", "Flightless giant"),
    ("PELICAN", "Pouched bird"),
    ("PENGUIN", "Tuxedoed bird"),
    ("PICTURE", "Wall hanging"),
    ("PLATEAU", "Flat highland"),
    ("PYRAMID", "Giza sight"),
    ("RAINBOW", "Post-storm arc"),
    ("SATCHEL", "Shoulder bag"),
    ("SCOOTER", "Sidewalk rider"),
    ("THEATER", "Play venue"),
    ("THUNDER", "Lightning's partner"),
    ("TRACTOR", "Farm hauler"),
    ("VILLAGE", "Small settlement"),
    ("VOLCANO", "Lava source"),
    ("WHISTLE", "Referee's tool"),
    // 8 letters
    ("AIRCRAFT", "Hangar occupant"),
    ("ALPHABET", "Twenty-six letters"),
    ("ANCESTOR", "Family tree root"),
    ("ANTELOPE", "Swift grazer"),
    ("AQUARIUM", "Fish house"),
    ("ARMCHAIR", "Comfy seat"),
    ("ASTEROID", "Space rock"),
    ("BACKPACK", "Hiker's carryall"),
    ("BASEMENT", "House's bottom level"),
    ("BIRTHDAY", "Annual celebration"),
    ("BLIZZARD", "Severe snowstorm"),
    ("BOOKCASE", "Shelf unit"),
    ("BOUNDARY", "Dividing line"),
    ("BRACELET", "Wrist wear"),
    ("BULLETIN", "Posted notice"),
    ("CALENDAR", "Date keeper"),
    ("CAMPFIRE", "Marshmallow roaster"),
    ("CARDINAL", "Red songbird"),
    ("CARRIAGE", "Horse-drawn vehicle"),
    ("CHAMPION", "Title holder"),
    ("CHESTNUT", "Roasting nut"),
    ("CORRIDOR", "Long hallway"),
    ("DAFFODIL", "Spring trumpet"),
    ("DAUGHTER", "Family member"),
    ("DINOSAUR", "Fossil source"),
    ("DOCUMENT", "Official paper"),
    ("DOORBELL", "Visitor's announcer"),
    ("DUCKLING", "Pond youngster"),
    ("ELEPHANT", "Trunk bearer"),
    ("ENVELOPE", "Letter holder"),
    ("FESTIVAL", "Celebration event"),
    ("FOUNTAIN", "Plaza centerpiece"),
    ("LAVENDER", "Fragrant purple herb"),
    ("MAGAZINE", "Glossy read"),
    ("MOUNTAIN", "Climber's goal"),
    ("NOTEBOOK", "Student's pad"),
    ("PAINTING", "Gallery piece"),
    ("SANDWICH", "Lunchbox staple"),
    ("SCISSORS", "Paper cutter"),
    ("SHOULDER", "Road's edge"),
    ("SIDEWALK", "Pedestrian path"),
    ("SQUIRREL", "Acorn hoarder"),
    ("UMBRELLA", "Rain shield"),
    // 9 letters
    ("ADVENTURE", "Thrilling journey"),
    ("ASPARAGUS", "Spring spear"),
    ("AVALANCHE", "Mountain slide"),
    ("BLACKBIRD", "Beatles song bird"),
    ("BUTTERFLY", "Garden flutterer"),
    ("CHOCOLATE", "Cocoa treat"),
    ("CROCODILE", "Nile lurker"),
    ("DANDELION", "Lawn invader"),
    ("LIGHTNING", "Storm flash"),
    ("SCARECROW", "Field guardian"),
];

static BANK_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| WORD_BANK.iter().copied().collect());

/// The bank as a word → clue map.
pub fn word_bank() -> &'static HashMap<&'static str, &'static str> {
    &BANK_MAP
}

/// Whether a clue can be resolved for `word`: direct bank hit, inflection
/// stripping back to a bank base form, or the external semantic dictionary.
pub fn has_clue_source(word: &str, semantic: Option<&dyn SemanticLookup>) -> bool {
    let bank = word_bank();
    if bank.contains_key(word) {
        return true;
    }
    if let Some(s) = word.strip_suffix('S') {
        if word.len() >= 4 && (bank.contains_key(s) || bank.contains_key(&s[..s.len().saturating_sub(1)])) {
            return true;
        }
    }
    if let Some(s) = word.strip_suffix("ED") {
        if word.len() >= 5 && (bank.contains_key(s) || bank.contains_key(&word[..word.len() - 1])) {
            return true;
        }
    }
    if let Some(s) = word.strip_suffix("ING") {
        if word.len() >= 6 && (bank.contains_key(s) || bank.contains_key(format!("{s}E").as_str())) {
            return true;
        }
    }
    if let Some(s) = word.strip_suffix("ER") {
        if word.len() >= 5 && (bank.contains_key(s) || bank.contains_key(&word[..word.len() - 1])) {
            return true;
        }
    }
    if let Some(s) = word.strip_suffix("LY") {
        if word.len() >= 5 && bank.contains_key(s) {
            return true;
        }
    }
    semantic.is_some_and(|s| s.definition(word).is_some())
}

/// Resolve a clue for `answer`.
///
/// Priority: direct bank hit, clue derived from a bank base form, the
/// external semantic dictionary, then a placeholder. The lexicon's
/// clueability filter keeps the placeholder out of generated puzzles.
pub fn resolve_clue(answer: &str, semantic: Option<&dyn SemanticLookup>) -> String {
    let bank = word_bank();
    if let Some(clue) = bank.get(answer) {
        return (*clue).to_string();
    }

    // Plural -S / -ES
    if answer.len() >= 4 && answer.ends_with('S') {
        if let Some(clue) = bank.get(&answer[..answer.len() - 1]) {
            return format!("{clue}, pl.");
        }
        if let Some(clue) = bank.get(&answer[..answer.len() - 2]) {
            return format!("{clue}, pl.");
        }
    }
    // Past tense -ED / -D
    if answer.len() >= 5 && answer.ends_with("ED") {
        if let Some(clue) = bank.get(&answer[..answer.len() - 2]) {
            return format!("{clue}, past tense");
        }
        if let Some(clue) = bank.get(&answer[..answer.len() - 1]) {
            return format!("{clue}, past tense");
        }
    }
    // -ING
    if answer.len() >= 6 && answer.ends_with("ING") {
        let base = &answer[..answer.len() - 3];
        if let Some(clue) = bank.get(base) {
            return format!("{clue}, ongoing");
        }
        if let Some(clue) = bank.get(format!("{base}E").as_str()) {
            return format!("{clue}, ongoing");
        }
    }
    // -ER comparative / agent
    if answer.len() >= 5 && answer.ends_with("ER") {
        if let Some(clue) = bank.get(&answer[..answer.len() - 2]) {
            return format!("More {}", clue.to_lowercase());
        }
        if let Some(clue) = bank.get(&answer[..answer.len() - 1]) {
            return format!("{clue} person");
        }
    }
    // -LY adverb
    if answer.len() >= 5 && answer.ends_with("LY") {
        if let Some(clue) = bank.get(&answer[..answer.len() - 2]) {
            return format!("In a {} way", clue.to_lowercase());
        }
    }

    if let Some(defn) = semantic.and_then(|s| s.definition(answer)) {
        return defn;
    }

    format!("Clue for {answer}")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLookup;
    impl SemanticLookup for FixedLookup {
        fn definition(&self, word: &str) -> Option<String> {
            (word == "QUASAR").then(|| "Distant radio source".to_string())
        }
    }

    #[test]
    fn test_bank_has_only_uppercase_alpha() {
        for (word, clue) in WORD_BANK {
            assert!(word.chars().all(|c| c.is_ascii_uppercase()), "bad word {word}");
            assert!(word.len() >= 3);
            assert!(!clue.is_empty());
        }
    }

    #[test]
    fn test_direct_bank_clue() {
        assert_eq!(resolve_clue("CAT", None), "Feline pet");
        assert!(has_clue_source("CAT", None));
    }

    #[test]
    fn test_plural_derivation() {
        assert_eq!(resolve_clue("CATS", None), "Feline pet, pl.");
        assert!(has_clue_source("CATS", None));
    }

    #[test]
    fn test_ing_derivation() {
        // BAKE + ING drops the E; the base+E lookup covers it.
        assert_eq!(resolve_clue("BAKING", None), "Make bread, ongoing");
        assert!(has_clue_source("BAKING", None));
    }

    #[test]
    fn test_adverb_derivation() {
        assert_eq!(resolve_clue("CALMLY", None), "In a peaceful way");
    }

    #[test]
    fn test_semantic_fallback() {
        assert_eq!(resolve_clue("QUASAR", Some(&FixedLookup)), "Distant radio source");
        assert!(has_clue_source("QUASAR", Some(&FixedLookup)));
        assert!(!has_clue_source("QUASAR", None));
    }

    #[test]
    fn test_placeholder_last_resort() {
        assert_eq!(resolve_clue("XYZZY", None), "Clue for XYZZY");
    }
}
